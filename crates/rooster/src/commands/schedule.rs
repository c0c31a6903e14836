//! Schedule command handlers.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use rooster_core::{App, DayItem, Room, ScheduleState, Shift};

use crate::cli::{OutputFormat, ScheduleArgs, ScheduleCommand, WeekArgs};
use crate::error::CliError;
use crate::output::{self, Painter};

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ShiftRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Shift")]
    title: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Shift> for ShiftRow {
    fn from(s: &Shift) -> Self {
        Self {
            id: s.id.clone(),
            time: s.time_display.clone(),
            title: s.title.clone(),
            assignee: s.assignee.name.clone(),
            status: s.status.clone(),
        }
    }
}

/// Serialized form of the week screen.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekView<'a> {
    current_month: &'a str,
    selected_room: &'a Room,
    selected_date: NaiveDate,
    week_days: &'a [DayItem],
    shifts: Vec<Shift>,
}

// ── Rendering ───────────────────────────────────────────────────────

fn long_date(date: NaiveDate) -> String {
    date.format("%a %-d %B %Y").to_string()
}

fn strip_line(days: &[DayItem], painter: Painter) -> String {
    days.iter()
        .map(|d| {
            let mark = if d.has_event { "•" } else { " " };
            let label = format!("{} {}{mark}", d.date, d.day);
            if d.is_selected {
                painter.selected(&label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn week_table(state: &ScheduleState, shifts: &[Shift], ctx: &Context) -> String {
    let painter = ctx.painter;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        painter.heading(&state.current_month),
        painter.dim(&format!("· {}", state.selected_room.name))
    );
    let _ = writeln!(out, "{}", strip_line(&state.week_days, painter));
    let _ = writeln!(out);
    if shifts.is_empty() {
        let _ = write!(out, "No shifts on {}", long_date(state.selected_date));
    } else {
        let rows: Vec<ShiftRow> = shifts.iter().map(ShiftRow::from).collect();
        let _ = write!(out, "{}", output::render_table(&rows));
    }
    out
}

fn shift_detail(shift: &Shift, ctx: &Context) -> String {
    let painter = ctx.painter;
    let mut out = String::new();

    let _ = writeln!(out, "{}", painter.heading(&shift.title));
    let _ = writeln!(
        out,
        "{}",
        painter.dim(&format!(
            "{} · {} · {}",
            long_date(shift.date),
            shift.time_display,
            shift.status
        ))
    );
    let _ = writeln!(out, "Assignee: {}", shift.assignee.name);
    if let Some(service) = &shift.service {
        let _ = writeln!(out, "Service:  {} ({})", service.name, service.time);
    }
    if let Some(room) = &shift.room {
        let _ = writeln!(out, "Room:     {}", room.name);
    }
    if let Some(description) = &shift.description {
        let _ = writeln!(out);
        let _ = writeln!(out, "{description}");
    }

    let team = shift.team_members();
    if !team.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", painter.heading("Team"));
        for member in team {
            let range = member.time_range.as_deref().unwrap_or("");
            let line = format!("  {:<20} {range}", member.name);
            let line = if member.is_highlighted {
                painter.accent(&line)
            } else {
                line
            };
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    let notes = shift.note_list();
    if !notes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", painter.heading("Notes"));
        for note in notes {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                note.author,
                painter.dim(&format!("({})", note.time_ago)),
                note.content
            );
        }
    }

    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(app: &App, args: ScheduleArgs, ctx: &Context) -> Result<(), CliError> {
    match args.command {
        ScheduleCommand::Week(week) => show_week(app, week, ctx).await,
        ScheduleCommand::Shift { id } => show_shift(app, &id, ctx).await,
    }
}

async fn show_week(app: &App, args: WeekArgs, ctx: &Context) -> Result<(), CliError> {
    let store = app.schedule();

    if let Some(room) = &args.room {
        store.select_room_by_id(room)?;
    }
    if let Some(date) = args.date {
        store.set_selected_date(date);
    }
    for direction in args.month {
        store.navigate_month(direction);
    }

    store.fetch_shifts().await;

    if let Some(index) = args.day {
        let day = store.snapshot().week_days.get(usize::from(index)).cloned();
        if let Some(day) = day {
            store.select_day(&day);
        }
    }

    let state = store.snapshot();
    debug!(
        selected = %state.selected_date,
        month = %state.current_month,
        "week resolved"
    );
    super::settle(state.view(), "schedule week", "No shifts scheduled", ctx)?;
    let shifts = state.shifts_for_selected_date();

    let out = match ctx.output {
        OutputFormat::Table => week_table(&state, &shifts, ctx),
        OutputFormat::Plain => shifts
            .iter()
            .map(|s| s.id.clone())
            .collect::<Vec<_>>()
            .join("\n"),
        format => {
            let view = WeekView {
                current_month: &state.current_month,
                selected_room: &state.selected_room,
                selected_date: state.selected_date,
                week_days: &state.week_days,
                shifts,
            };
            output::render_single(format, &view, |_| String::new(), |_| String::new())
        }
    };
    output::print_output(&out, ctx.quiet);
    Ok(())
}

async fn show_shift(app: &App, id: &str, ctx: &Context) -> Result<(), CliError> {
    let store = app.schedule();
    let shift = store.shift(id).await?;

    store.open_shift_detail(shift);
    let state = store.snapshot();
    let out = state
        .selected_shift()
        .map(|shift| {
            output::render_single(
                ctx.output,
                shift,
                |s| shift_detail(s, ctx),
                |s| s.id.clone(),
            )
        })
        .unwrap_or_default();
    store.close_shift_detail();

    output::print_output(&out, ctx.quiet);
    Ok(())
}
