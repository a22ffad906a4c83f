//! Organizations-backed account enumeration

use async_trait::async_trait;
use dns_recon_aws::{OrgAccount, OrganizationsClient};

use crate::traits::AccountSource;

/// Enumerates the organization's ACTIVE member accounts.
///
/// A page failure aborts the walk and returns whatever ids were collected up
/// to that point; enumeration never errors out of the trait.
pub struct OrganizationsAccountSource {
    client: OrganizationsClient,
}

impl OrganizationsAccountSource {
    /// Wrap an Organizations client signed with the caller's base identity.
    #[must_use]
    pub fn new(client: OrganizationsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountSource for OrganizationsAccountSource {
    async fn list_active_accounts(&self) -> Vec<String> {
        let mut account_ids = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = match self.client.list_accounts(next_token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!("Failed to list accounts: {e}");
                    break;
                }
            };

            account_ids.extend(
                page.accounts
                    .into_iter()
                    .filter(OrgAccount::is_active)
                    .filter_map(|account| account.id),
            );

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        log::info!(
            "Found {} active accounts in the organization",
            account_ids.len()
        );
        account_ids
    }
}
