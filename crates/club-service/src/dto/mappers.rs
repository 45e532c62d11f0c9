//! Entity to DTO conversions

use club_core::{
    Achievement, Activity, ActivityDetail, ActivitySummary, LudotecaDetail, LudotecaEntry,
    MemberOverview, Participant, ScheduledEvent, User, UserStatus,
};

use super::responses::{
    AchievementResponse, ActivitySummaryResponse, BoardItemResponse, MemberResponse,
    ParticipantResponse, ScheduledEventResponse, StatusBody, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            dni: user.dni.clone(),
            avatar_url: user.avatar_url.clone(),
            score: user.score,
        }
    }
}

impl From<UserStatus> for StatusBody {
    fn from(status: UserStatus) -> Self {
        Self {
            attendance: status.attendance,
            payment: status.payment,
            transport: status.transport,
            food: status.food,
        }
    }
}

impl From<Achievement> for AchievementResponse {
    fn from(a: Achievement) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            avatar_url: a.avatar_url,
        }
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            id: p.user_id,
            name: p.name,
            avatar_url: p.avatar_url,
            joined_at: p.joined_at,
        }
    }
}

impl From<ActivityDetail> for BoardItemResponse {
    fn from(detail: ActivityDetail) -> Self {
        board_response(
            detail.activity,
            detail.creator_name,
            detail.is_joined,
            detail.participants,
        )
    }
}

impl From<LudotecaDetail> for BoardItemResponse {
    fn from(detail: LudotecaDetail) -> Self {
        let e = detail.entry;
        board_response(
            Activity {
                id: e.id,
                title: e.title,
                kind: e.kind,
                description: e.description,
                participants: e.participants,
                duration: e.duration,
                image_url: e.image_url,
                created_by: e.created_by,
                created_at: e.created_at,
            },
            detail.creator_name,
            detail.is_joined,
            detail.participants,
        )
    }
}

fn board_response(
    item: Activity,
    creator_name: Option<String>,
    is_joined: bool,
    participants: Vec<Participant>,
) -> BoardItemResponse {
    BoardItemResponse {
        id: item.id,
        title: item.title,
        kind: item.kind,
        description: item.description,
        participants: item.participants,
        duration: item.duration,
        image_url: item.image_url,
        created_by: item.created_by,
        created_at: item.created_at,
        creator_name,
        participants_list: participants.into_iter().map(Into::into).collect(),
        is_joined,
    }
}

impl BoardItemResponse {
    /// Response for a just-created item: the creator is the only context
    /// and the participant list is empty
    #[must_use]
    pub fn created(item: Activity, creator_name: String) -> Self {
        board_response(item, Some(creator_name), false, Vec::new())
    }

    /// Same, for a ludoteca entry
    #[must_use]
    pub fn created_entry(entry: LudotecaEntry, creator_name: String) -> Self {
        LudotecaDetail {
            entry,
            creator_name: Some(creator_name),
            is_joined: false,
            participants: Vec::new(),
        }
        .into()
    }
}

impl From<ActivitySummary> for ActivitySummaryResponse {
    fn from(a: ActivitySummary) -> Self {
        Self {
            id: a.id,
            title: a.title,
            kind: a.kind,
            description: a.description,
            participants: a.participants,
            duration: a.duration,
            image_url: a.image_url,
        }
    }
}

impl From<ScheduledEvent> for ScheduledEventResponse {
    fn from(s: ScheduledEvent) -> Self {
        Self {
            id: s.event.id,
            day: s.event.day,
            zone: s.event.zone,
            start_hour: s.event.start_hour,
            end_hour: s.event.end_hour,
            activity: s.activity.into(),
        }
    }
}

impl From<MemberOverview> for MemberResponse {
    fn from(m: MemberOverview) -> Self {
        Self {
            id: m.user.id,
            name: m.user.name,
            email: m.user.email,
            avatar_url: m.user.avatar_url,
            score: m.user.score,
            role: m.role,
            achievements: m.achievements.into_iter().map(Into::into).collect(),
        }
    }
}
