//! Assignee resolution.
//!
//! Decides who gets a request: the explicitly named user, a uniform pick
//! from an explicit candidate list, or a uniform pick from the channel
//! membership that skips bots, app users and the initiator.

use async_trait::async_trait;
use rand::Rng;
use tracing::warn;

use crate::core::models::{AssigneeMode, AssignmentOutcome, UserInfo};
use crate::errors::RelayError;

/// Floor for the redraw budget in small channels.
const MIN_DRAW_BUDGET: usize = 32;
/// Redraw budget scales with membership size.
const DRAWS_PER_MEMBER: usize = 8;

/// Read-only lookups the channel-random mode needs. Implemented by
/// `SlackClient` in production and by synthetic directories in tests.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Full membership of a channel.
    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, RelayError>;

    /// Profile flags for a single user.
    async fn user_info(&self, user_id: &str) -> Result<UserInfo, RelayError>;
}

/// Resolve the assignee for a parsed command.
///
/// Explicit and list modes never touch the directory. Channel mode fetches
/// the membership once, then redraws until it finds a human member other
/// than the initiator. The redraw loop is budgeted; a channel with no
/// eligible member fails with [`RelayError::NoEligibleAssignee`] instead of
/// spinning forever.
///
/// # Errors
///
/// Returns `MembershipLookup` when the membership fetch fails,
/// `NoEligibleAssignee` when the budget is exhausted or the channel is
/// empty, and propagates `users.info` lookup failures.
pub async fn resolve<R, D>(
    mode: &AssigneeMode,
    channel_id: &str,
    initiator_id: &str,
    directory: &D,
    rng: &mut R,
) -> Result<AssignmentOutcome, RelayError>
where
    R: Rng + Send,
    D: Directory + ?Sized,
{
    match mode {
        AssigneeMode::Explicit(name) => Ok(AssignmentOutcome {
            assignee: name.clone(),
            was_random: false,
        }),
        AssigneeMode::RandomFromList(candidates) => {
            if candidates.is_empty() {
                return Err(RelayError::NoEligibleAssignee);
            }
            let pick = &candidates[rng.gen_range(0..candidates.len())];
            Ok(AssignmentOutcome {
                assignee: pick.clone(),
                was_random: true,
            })
        }
        AssigneeMode::RandomFromChannel => {
            let members = directory
                .channel_members(channel_id)
                .await
                .map_err(|e| RelayError::MembershipLookup(e.to_string()))?;
            if members.is_empty() {
                return Err(RelayError::NoEligibleAssignee);
            }

            let budget = members
                .len()
                .saturating_mul(DRAWS_PER_MEMBER)
                .max(MIN_DRAW_BUDGET);

            for _ in 0..budget {
                let candidate = &members[rng.gen_range(0..members.len())];
                if candidate == initiator_id {
                    continue;
                }
                let info = directory.user_info(candidate).await?;
                if info.is_bot || info.is_app_user {
                    continue;
                }
                return Ok(AssignmentOutcome {
                    assignee: format!("<@{}>", info.id),
                    was_random: true,
                });
            }

            warn!(
                "Redraw budget exhausted for channel {} ({} members)",
                channel_id,
                members.len()
            );
            Err(RelayError::NoEligibleAssignee)
        }
    }
}
