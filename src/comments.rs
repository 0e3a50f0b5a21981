//! Comment listing, submission and deletion.
//!
//! The server owns the comment collection and applies the limit itself; the
//! client renders exactly what comes back, in order. Deletion clears the
//! whole collection and is always followed by a fresh listing, in that order.

use crate::config::Endpoints;
use crate::error::{PortfolioError, Result};
use crate::models::{render_comment, CommentLimit, COMMENT_FORM_FIELD, COMMENT_LIMIT_PARAM};
use crate::page::{Input, PageSurface, Slot};
use crate::remote::{get_json, Remote};
use tracing::info;

// ============================================================================
// Listing
// ============================================================================

pub async fn fetch_comments<R>(
    remote: &R,
    endpoints: &Endpoints,
    limit: CommentLimit,
) -> Result<Vec<String>>
where
    R: Remote + ?Sized,
{
    get_json(
        remote,
        &endpoints.comments,
        &[(COMMENT_LIMIT_PARAM, limit.to_string())],
    )
    .await
}

/// Replace the rendered list with `comments`.
pub fn render_comments<P>(page: &mut P, comments: &[String]) -> Result<()>
where
    P: PageSurface + ?Sized,
{
    page.clear(Slot::CommentsList)?;
    for comment in comments {
        page.append_item(Slot::CommentsList, &render_comment(comment))?;
    }
    Ok(())
}

/// Fetch up to `limit` comments and re-render the list in full.
/// Returns the number of comments rendered.
pub async fn refresh_comments<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
    limit: CommentLimit,
) -> Result<usize>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let comments = fetch_comments(remote, endpoints, limit).await?;
    render_comments(page, &comments)?;

    info!(%limit, rendered = comments.len(), "refreshed comments");
    Ok(comments.len())
}

pub fn read_limit<P>(page: &P) -> Result<CommentLimit>
where
    P: PageSurface + ?Sized,
{
    page.read_input(Input::CommentLimit)?.parse()
}

/// Same as `refresh_comments`, with the limit taken from the page input.
pub async fn refresh_comments_from_input<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
) -> Result<usize>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let limit = read_limit(page)?;
    refresh_comments(remote, endpoints, page, limit).await
}

// ============================================================================
// Deletion
// ============================================================================

/// Clear the server's whole comment collection, then re-render the list.
/// The listing request is only issued once the delete has been acknowledged.
pub async fn delete_all_comments<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
) -> Result<usize>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    // Validate the input first so a bad limit never costs the visitor their comments
    let limit = read_limit(page)?;

    remote.post_form(&endpoints.delete_comments, &[]).await?;
    info!("deleted all comments");

    refresh_comments(remote, endpoints, page, limit).await
}

// ============================================================================
// Submission
// ============================================================================

/// Post `text` through the comment form, then re-render the list.
///
/// The server splits the text on commas and stores each part as its own
/// comment, so one submission can add several items.
pub async fn submit_comments<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
    text: &str,
) -> Result<usize>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(PortfolioError::EmptyComment);
    }
    let limit = read_limit(page)?;

    remote
        .post_form(&endpoints.comments, &[(COMMENT_FORM_FIELD, text.to_string())])
        .await?;
    info!(len = text.len(), "submitted comments");

    refresh_comments(remote, endpoints, page, limit).await
}
