//! Login-gated visibility of the comment form.
//!
//! The status is checked once per page load. A visitor who is not logged in
//! sees nothing change: the form simply stays hidden.

use crate::config::Endpoints;
use crate::error::Result;
use crate::page::{PageSurface, Slot};
use crate::remote::{get_json, Remote};
use tracing::info;

pub async fn fetch_login_status<R>(remote: &R, endpoints: &Endpoints) -> Result<bool>
where
    R: Remote + ?Sized,
{
    get_json(remote, &endpoints.login_status, &[]).await
}

/// Reveal the comment form when `logged_in`; otherwise leave the page alone.
pub fn apply_login_status<P>(page: &mut P, logged_in: bool) -> Result<()>
where
    P: PageSurface + ?Sized,
{
    if logged_in {
        page.set_visible(Slot::CommentForm, true)?;
    }
    info!(logged_in, "applied login status");
    Ok(())
}

pub async fn check_login_and_reveal_form<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
) -> Result<bool>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let logged_in = fetch_login_status(remote, endpoints).await?;
    apply_login_status(page, logged_in)?;
    Ok(logged_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use crate::page::{MemoryPage, Mutation};
    use crate::testing::StubRemote;

    #[tokio::test]
    async fn test_logged_in_reveals_only_the_form() {
        // Servlet-style body with a trailing newline
        let remote = StubRemote::new().reply("/login-status", "true\n");
        let mut page = MemoryPage::new();

        let status = check_login_and_reveal_form(&remote, &Endpoints::default(), &mut page)
            .await
            .unwrap();

        assert!(status);
        assert!(page.is_visible(Slot::CommentForm));
        assert_eq!(
            page.mutations(),
            &[Mutation::SetVisible(Slot::CommentForm, true)]
        );
    }

    #[tokio::test]
    async fn test_logged_out_mutates_nothing() {
        let remote = StubRemote::new().reply("/login-status", "false");
        let mut page = MemoryPage::new();

        let status = check_login_and_reveal_form(&remote, &Endpoints::default(), &mut page)
            .await
            .unwrap();

        assert!(!status);
        assert!(!page.is_visible(Slot::CommentForm));
        assert!(page.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_non_boolean_status_is_a_decode_error() {
        let remote = StubRemote::new().reply("/login-status", "\"yes\"");
        let mut page = MemoryPage::new();

        let result = check_login_and_reveal_form(&remote, &Endpoints::default(), &mut page).await;

        assert!(matches!(result, Err(PortfolioError::Decode { .. })));
        assert!(page.mutations().is_empty());
    }
}
