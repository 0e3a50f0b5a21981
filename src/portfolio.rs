//! One page load: a remote, a page, and the operations that connect them.
//!
//! Every operation takes `&mut self`, so a page can only run one at a time
//! and multi-step flows (delete then refresh) cannot interleave with others.

use crate::comments;
use crate::config::{Config, Endpoints};
use crate::error::Result;
use crate::facts;
use crate::greeting;
use crate::locations;
use crate::login;
use crate::models::CommentLimit;
use crate::page::PageSurface;
use crate::remote::{HttpRemote, Remote};
use tracing::debug;

pub struct Portfolio<R, P> {
    remote: R,
    page: P,
    endpoints: Endpoints,
    login_status: Option<bool>,
}

impl<P: PageSurface> Portfolio<HttpRemote, P> {
    /// Portfolio talking HTTP to the server described by `config`.
    pub fn connect(config: &Config, page: P) -> Result<Self> {
        Ok(Self::new(HttpRemote::new(config)?, config.endpoints.clone(), page))
    }
}

impl<R: Remote, P: PageSurface> Portfolio<R, P> {
    pub fn new(remote: R, endpoints: Endpoints, page: P) -> Self {
        Self {
            remote,
            page,
            endpoints,
            login_status: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// Login status, if it has been checked during this page load.
    pub fn login_status(&self) -> Option<bool> {
        self.login_status
    }

    pub fn display_random_fact(&mut self) -> Result<&'static str> {
        facts::display_random_fact(&mut self.page)
    }

    pub async fn display_greeting(&mut self) -> Result<String> {
        greeting::display_greeting(&self.remote, &self.endpoints, &mut self.page).await
    }

    /// Checks the login status at most once; later calls reuse the first answer.
    pub async fn check_login_and_reveal_form(&mut self) -> Result<bool> {
        if let Some(status) = self.login_status {
            debug!(status, "login status already checked");
            return Ok(status);
        }

        let status =
            login::check_login_and_reveal_form(&self.remote, &self.endpoints, &mut self.page)
                .await?;
        self.login_status = Some(status);
        Ok(status)
    }

    pub async fn refresh_comments(&mut self, limit: CommentLimit) -> Result<usize> {
        comments::refresh_comments(&self.remote, &self.endpoints, &mut self.page, limit).await
    }

    pub async fn refresh_comments_from_input(&mut self) -> Result<usize> {
        comments::refresh_comments_from_input(&self.remote, &self.endpoints, &mut self.page).await
    }

    pub async fn delete_all_comments(&mut self) -> Result<usize> {
        comments::delete_all_comments(&self.remote, &self.endpoints, &mut self.page).await
    }

    pub async fn submit_comments(&mut self, text: &str) -> Result<usize> {
        comments::submit_comments(&self.remote, &self.endpoints, &mut self.page, text).await
    }

    pub async fn display_locations(&mut self) -> Result<Vec<String>> {
        locations::display_locations(&self.remote, &self.endpoints, &mut self.page).await
    }
}
