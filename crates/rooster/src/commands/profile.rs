//! Profile command handlers.

use serde::Serialize;

use rooster_core::{App, User, UserState};

use crate::cli::{ProfileArgs, ProfileCommand};
use crate::output;

use super::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView<'a> {
    is_authenticated: bool,
    user: Option<&'a User>,
}

impl<'a> From<&'a UserState> for SessionView<'a> {
    fn from(state: &'a UserState) -> Self {
        Self {
            is_authenticated: state.is_authenticated,
            user: state.user.as_ref(),
        }
    }
}

fn detail(view: &SessionView<'_>, ctx: &Context) -> String {
    match view.user {
        Some(user) => format!(
            "{}\n{}",
            ctx.painter.heading(&user.name),
            ctx.painter.dim(&user.role)
        ),
        None => "Not signed in".to_owned(),
    }
}

pub fn handle(app: &App, args: ProfileArgs, ctx: &Context) {
    let store = app.user();
    if let Some(ProfileCommand::Logout) = args.command {
        store.logout();
        output::print_notice("Signed out", ctx.quiet);
    }

    let state = store.snapshot();
    let view = SessionView::from(state.as_ref());
    let out = output::render_single(
        ctx.output,
        &view,
        |v| detail(v, ctx),
        |v| v.user.map(|u| u.id.clone()).unwrap_or_default(),
    );
    output::print_output(&out, ctx.quiet);
}
