use uuid::Uuid;

use crate::domain::repository::{NotificationRepository, ProfileRepository, RequestRepository};
use crate::domain::types::{NotificationView, PairView};
use crate::error::ServiceError;

// ── ActivePairs ──────────────────────────────────────────────────────────────

pub struct ActivePairsUseCase<R: RequestRepository, P: ProfileRepository> {
    pub requests: R,
    pub profiles: P,
}

impl<R: RequestRepository, P: ProfileRepository> ActivePairsUseCase<R, P> {
    /// Accepted requests involving the caller, joined with the counterpart's
    /// profile. Pairs whose counterpart has no profile are omitted
    /// (inner-join semantics).
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<PairView>, ServiceError> {
        let accepted = self.requests.list_accepted_for(user_id).await?;

        let mut pairs = Vec::with_capacity(accepted.len());
        for request in accepted {
            // Both sides are known to include `user_id` by the query.
            let Some(counterpart_id) = request.counterpart_of(user_id) else {
                continue;
            };
            let Some(relationship_type) = request.role_of(user_id) else {
                continue;
            };
            let Some(counterpart) = self.profiles.find_by_user(counterpart_id).await? else {
                continue;
            };
            pairs.push(PairView {
                request,
                counterpart,
                relationship_type,
            });
        }
        Ok(pairs)
    }
}

// ── LiveNotifications ────────────────────────────────────────────────────────

pub struct LiveNotificationsUseCase<
    N: NotificationRepository,
    R: RequestRepository,
    P: ProfileRepository,
> {
    pub notifications: N,
    pub requests: R,
    pub profiles: P,
}

impl<N: NotificationRepository, R: RequestRepository, P: ProfileRepository>
    LiveNotificationsUseCase<N, R, P>
{
    /// Unread notifications, newest first, each joined with the counterpart's
    /// profile and the request's current status. Left-join semantics: a
    /// missing request or profile leaves the view fields empty.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<NotificationView>, ServiceError> {
        let unread = self.notifications.list_unread(user_id).await?;

        let mut views = Vec::with_capacity(unread.len());
        for notification in unread {
            let request = match notification.request_id {
                Some(request_id) => self.requests.find_by_id(request_id).await?,
                None => None,
            };
            let counterpart = match request
                .as_ref()
                .and_then(|r| r.counterpart_of(user_id))
            {
                Some(counterpart_id) => self.profiles.find_by_user(counterpart_id).await?,
                None => None,
            };
            views.push(NotificationView {
                notification,
                counterpart,
                request_status: request.map(|r| r.status),
            });
        }
        Ok(views)
    }
}
