//! Fixture data served by [`MockSource`](crate::MockSource).

use chrono::NaiveDate;

use crate::models::{
    Author, Publication, Room, Shift, ShiftNote, ShiftRoom, ShiftService, Tag, TeamMember, User,
};

const AVATAR_MALE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=60&h=60&fit=crop&crop=face";
const AVATAR_FEMALE: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=80&h=80&fit=crop&crop=face";
const VACCINE_IMAGE: &str =
    "https://images.unsplash.com/photo-1584483766114-2cea6facdf57?w=400&h=250&fit=crop";
const MRNA_IMAGE: &str =
    "https://images.unsplash.com/photo-1579165466991-467135ad3110?w=400&h=250&fit=crop";

/// The day every fixture shift is scheduled on.
pub fn fixture_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 18).expect("fixture date is valid")
}

pub fn current_user() -> User {
    User {
        id: "1".into(),
        name: "John Doe".into(),
        avatar: AVATAR_MALE.into(),
        role: "Medical Professional".into(),
    }
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room::new("1", "Room1"),
        Room::new("2", "Room2"),
        Room::new("3", "Room3"),
    ]
}

fn tag(id: &str, label: &str, color: &str, text_color: &str) -> Tag {
    Tag {
        id: id.into(),
        label: label.into(),
        color: color.into(),
        text_color: text_color.into(),
    }
}

fn hesitancy_trends(id: &str) -> Publication {
    Publication {
        id: id.into(),
        title: "Vaccine hesitancy trends".into(),
        description: "How do you build stroke risk tools that are both clinically powerful \
                      and user-friendly for everyday care?"
            .into(),
        image_url: VACCINE_IMAGE.into(),
        tags: vec![
            tag("1", "Covid", "#E8F4FD", "#0EA5E9"),
            tag("2", "Vaccine", "#FEF3E2", "#F97316"),
        ],
        author: Author {
            id: "1".into(),
            name: "Elijah Oyindamola".into(),
            avatar: AVATAR_MALE.into(),
        },
        published_date: "20 Jan 2022".into(),
        read_time: "3mins".into(),
    }
}

pub fn publications() -> Vec<Publication> {
    vec![
        hesitancy_trends("1"),
        hesitancy_trends("2"),
        Publication {
            id: "3".into(),
            title: "Understanding mRNA Technology".into(),
            description: "A deep dive into how mRNA vaccines work and their potential \
                          applications beyond COVID-19."
                .into(),
            image_url: MRNA_IMAGE.into(),
            tags: vec![
                tag("3", "Research", "#F0FDF4", "#16A34A"),
                tag("2", "Vaccine", "#FEF3E2", "#F97316"),
            ],
            author: Author {
                id: "2".into(),
                name: "Dr. Sarah Chen".into(),
                avatar: AVATAR_FEMALE.into(),
            },
            published_date: "15 Mar 2022".into(),
            read_time: "5mins".into(),
        },
    ]
}

fn member(id: &str, name: &str, time_range: Option<&str>, is_highlighted: bool) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        avatar: AVATAR_MALE.into(),
        time_range: time_range.map(Into::into),
        is_highlighted,
    }
}

fn note(id: &str) -> ShiftNote {
    ShiftNote {
        id: id.into(),
        author: "Omar r".into(),
        avatar: AVATAR_MALE.into(),
        content: "Medewerker is medisch toegewezen a...".into(),
        time_ago: "2 min geleden".into(),
    }
}

fn bare_shift(id: &str, start_time: &str) -> Shift {
    Shift {
        id: id.into(),
        title: "OctendedisentShift".into(),
        start_time: start_time.into(),
        end_time: "20:00".into(),
        time_display: "12:00 - 20:00".into(),
        date: fixture_day(),
        assignee: member("1", "Omar r.", None, false),
        status: "Beschikbaar".into(),
        description: None,
        service: None,
        room: None,
        team: None,
        notes: None,
    }
}

pub fn shifts() -> Vec<Shift> {
    let detailed = Shift {
        description: Some(
            "Dit is een kamer voor gesprekken tussen chirurgische artsen en patiënten over".into(),
        ),
        service: Some(ShiftService {
            name: "Ochtend 8:00-12:00".into(),
            time: "8:00-12:00".into(),
            color: "#FF6B35".into(),
        }),
        room: Some(ShiftRoom {
            name: "Verkoeverruimte".into(),
            icon: "building".into(),
        }),
        team: Some(vec![
            member("1", "Omar r., Elijah a.", Some("4:00 - 8:00"), false),
            member("2", "Omar r., Elijah a.", Some("8:00 - 12:00"), true),
        ]),
        notes: Some(vec![note("1"), note("2")]),
        ..bare_shift("1", "08:30")
    };

    vec![
        detailed,
        bare_shift("2", "09:00"),
        bare_shift("3", "09:30"),
        bare_shift("4", "10:00"),
        bare_shift("5", "10:30"),
    ]
}
