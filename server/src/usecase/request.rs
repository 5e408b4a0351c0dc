use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::RequestRepository;
use crate::domain::types::{
    Decision, MentorshipRequest, Notification, NotificationKind, RequestStatus,
};
use crate::error::ServiceError;

// ── CreateRequest ────────────────────────────────────────────────────────────

pub struct CreateRequestUseCase<R: RequestRepository> {
    pub repo: R,
}

impl<R: RequestRepository> CreateRequestUseCase<R> {
    /// Insert a pending request from the mentee toward the mentor, plus the
    /// originating notification for the mentor, atomically. Duplicate pending
    /// requests between the same pair are not checked.
    pub async fn execute(&self, mentee_id: Uuid, mentor_id: Uuid) -> Result<Uuid, ServiceError> {
        let request = MentorshipRequest {
            id: Uuid::now_v7(),
            mentor_id,
            mentee_id,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };
        let notification =
            Notification::for_transition(mentor_id, request.id, NotificationKind::Request);
        self.repo.create(&request, &notification).await?;
        Ok(request.id)
    }
}

// ── DecideRequest (accept / decline) ─────────────────────────────────────────

pub struct DecideRequestUseCase<R: RequestRepository> {
    pub repo: R,
}

impl<R: RequestRepository> DecideRequestUseCase<R> {
    /// Classify first (404 absent, 403 wrong actor, 409 wrong state), then
    /// apply the guarded transition. The repository keeps the guard inside
    /// the transaction, so a concurrent transition that wins the race also
    /// surfaces as 409 rather than a partial effect.
    pub async fn execute(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        decision: Decision,
    ) -> Result<(), ServiceError> {
        let request = self
            .repo
            .find_by_id(request_id)
            .await?
            .ok_or(ServiceError::RequestNotFound)?;

        if request.mentor_id != actor_id {
            return Err(ServiceError::Forbidden);
        }
        if !request
            .status
            .can_transition_to(decision.target_status())
        {
            return Err(ServiceError::InvalidTransition);
        }

        let notification = Notification::for_transition(
            request.mentee_id,
            request.id,
            decision.notification_kind(),
        );
        let applied = self
            .repo
            .decide(request.id, actor_id, decision, &notification)
            .await?;
        if !applied {
            return Err(ServiceError::InvalidTransition);
        }
        Ok(())
    }
}

// ── EndRequest ───────────────────────────────────────────────────────────────

pub struct EndRequestUseCase<R: RequestRepository> {
    pub repo: R,
}

impl<R: RequestRepository> EndRequestUseCase<R> {
    /// Either party may end an accepted pair; the counterpart gets the
    /// `ended` notification. There is no retraction step — no originating
    /// notification is pending at this stage.
    pub async fn execute(&self, request_id: Uuid, actor_id: Uuid) -> Result<(), ServiceError> {
        let request = self
            .repo
            .find_by_id(request_id)
            .await?
            .ok_or(ServiceError::RequestNotFound)?;

        let Some(counterpart_id) = request.counterpart_of(actor_id) else {
            return Err(ServiceError::Forbidden);
        };
        if !request.status.can_transition_to(RequestStatus::Ended) {
            return Err(ServiceError::InvalidTransition);
        }

        let notification =
            Notification::for_transition(counterpart_id, request.id, NotificationKind::Ended);
        let applied = self.repo.end(request.id, actor_id, &notification).await?;
        if !applied {
            return Err(ServiceError::InvalidTransition);
        }
        Ok(())
    }
}
