use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account owned by the identity store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Profile role. A request always flows mentee → mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mentor" => Some(Self::Mentor),
            "mentee" => Some(Self::Mentee),
            _ => None,
        }
    }

    /// The opposite role, used for counterpart discovery.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Mentor => Self::Mentee,
            Self::Mentee => Self::Mentor,
        }
    }
}

/// Mentor/mentee profile. Tag lists are ordered string sequences here;
/// comma-joining happens only at the storage boundary.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

/// Mentorship-request status. Legal transitions:
/// pending → accepted, pending → declined, accepted → ended.
/// `declined` and `ended` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
    Ended,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Ended => "ended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }

    /// Transition table; `declined` and `ended` allow nothing further.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, RequestStatus::Accepted)
                | (Self::Pending, RequestStatus::Declined)
                | (Self::Accepted, RequestStatus::Ended)
        )
    }
}

/// A mentor's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
}

impl Decision {
    pub fn target_status(&self) -> RequestStatus {
        match self {
            Self::Accept => RequestStatus::Accepted,
            Self::Decline => RequestStatus::Declined,
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            Self::Accept => NotificationKind::Accepted,
            Self::Decline => NotificationKind::Declined,
        }
    }
}

/// Mentorship request created by the mentee toward the mentor.
#[derive(Debug, Clone)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl MentorshipRequest {
    pub fn is_party(&self, user_id: Uuid) -> bool {
        self.mentor_id == user_id || self.mentee_id == user_id
    }

    /// The other participant, relative to `user_id`. `None` when `user_id`
    /// is not a party to the request.
    pub fn counterpart_of(&self, user_id: Uuid) -> Option<Uuid> {
        if self.mentor_id == user_id {
            Some(self.mentee_id)
        } else if self.mentee_id == user_id {
            Some(self.mentor_id)
        } else {
            None
        }
    }

    /// The role `user_id` plays in this request, if any.
    pub fn role_of(&self, user_id: Uuid) -> Option<Role> {
        if self.mentor_id == user_id {
            Some(Role::Mentor)
        } else if self.mentee_id == user_id {
            Some(Role::Mentee)
        } else {
            None
        }
    }
}

/// Notification kind, one per request transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Request,
    Accepted,
    Declined,
    Ended,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Ended => "ended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "request" => Some(Self::Request),
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }

    /// Canonical user-facing message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Request => "You have a new mentorship request",
            Self::Accepted => "Your mentorship request has been accepted",
            Self::Declined => "Your mentorship request has been declined",
            Self::Ended => "Your mentorship relationship has ended",
        }
    }
}

/// Notification addressed to `user_id`. `read` means dismissed and is never
/// unset.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub request_id: Option<Uuid>,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build the unread notification produced by a request transition.
    pub fn for_transition(recipient: Uuid, request_id: Uuid, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: recipient,
            request_id: Some(request_id),
            message: kind.message().to_owned(),
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// An accepted request viewed from one participant's side.
#[derive(Debug, Clone)]
pub struct PairView {
    pub request: MentorshipRequest,
    pub counterpart: Profile,
    /// The caller's role in this pair.
    pub relationship_type: Role,
}

/// A live (unread) notification joined with its request context. Missing
/// joins stay `None` here; the wire layer renders them as empty strings and
/// defaults the status to `pending`.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub notification: Notification,
    pub counterpart: Option<Profile>,
    pub request_status: Option<RequestStatus>,
}

/// Join a tag list into the comma-separated storage form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Split the comma-separated storage form into a tag list, dropping empty
/// segments so `""` round-trips to an empty list.
pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
