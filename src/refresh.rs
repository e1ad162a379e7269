//! Sequential per-site refresh workflow.
//!
//! A refresh run walks its target sites strictly in order and issues one
//! refresh request at a time, so progress can be reported site by site and
//! the backend never sees more than one in-flight re-scrape. The first
//! failure, of either kind, aborts the whole run; there are no retries and
//! no skip-and-continue.

use std::future::Future;

use crate::api::ApiError;
use crate::state::Site;

/// Which sites a refresh run targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RefreshScope {
    #[default]
    All,
    One(Site),
}

impl RefreshScope {
    /// The sites to process, in processing order.
    pub fn sites(self) -> Vec<Site> {
        match self {
            RefreshScope::All => Site::ALL.to_vec(),
            RefreshScope::One(site) => vec![site],
        }
    }

    pub fn parse(value: &str) -> RefreshScope {
        match Site::parse(value) {
            Some(site) => RefreshScope::One(site),
            None => RefreshScope::All,
        }
    }
}

/// Observable state of the refresh trigger, mirrored into the controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RefreshProgress {
    #[default]
    Idle,
    /// A run was requested but the first site has not been reached yet.
    Starting,
    Site(Site),
}

impl RefreshProgress {
    pub fn is_active(self) -> bool {
        self != RefreshProgress::Idle
    }
}

/// Why a refresh run stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshFailure {
    /// The server answered with a failure, optionally carrying a detail
    /// message in the response body.
    Server { site: Site, detail: String },
    /// The request never completed.
    Network { site: Site, message: String },
}

impl RefreshFailure {
    pub fn title(&self) -> String {
        match self {
            RefreshFailure::Server { site, .. } => format!("Failed on {site}"),
            RefreshFailure::Network { site, .. } => format!("Network error on {site}"),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            RefreshFailure::Server { detail, .. } => detail,
            RefreshFailure::Network { message, .. } => message,
        }
    }
}

/// Result of one refresh run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Sites refreshed successfully, in processing order.
    pub completed: Vec<Site>,
    /// Set when the run aborted before exhausting its sites.
    pub failure: Option<RefreshFailure>,
}

/// Run a refresh over `sites`, in order.
///
/// `refresh_site` performs the actual request. `progress` observes the
/// currently processing site (`None` once the run ends), and
/// `on_site_refreshed` fires after each successful site, before it is added
/// to the completed list.
pub async fn run<F, Fut>(
    sites: &[Site],
    mut refresh_site: F,
    mut progress: impl FnMut(Option<Site>),
    mut on_site_refreshed: impl FnMut(Site),
) -> RefreshOutcome
where
    F: FnMut(Site) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut outcome = RefreshOutcome::default();

    for &site in sites {
        progress(Some(site));

        match refresh_site(site).await {
            Ok(()) => {
                on_site_refreshed(site);
                outcome.completed.push(site);
            }
            Err(ApiError::Server { detail, .. }) => {
                outcome.failure = Some(RefreshFailure::Server { site, detail });
                break;
            }
            Err(err) => {
                outcome.failure = Some(RefreshFailure::Network {
                    site,
                    message: err.to_string(),
                });
                break;
            }
        }
    }

    progress(None);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A reqwest transport error, produced without touching the network.
    async fn transport_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("http://")
            .send()
            .await
            .expect_err("url without a host must not resolve")
    }

    #[tokio::test]
    async fn test_all_sites_processed_in_order_on_success() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let refreshed = Rc::new(RefCell::new(Vec::new()));

        let outcome = run(
            &Site::ALL,
            |site| {
                calls.borrow_mut().push(site);
                async { Ok(()) }
            },
            |_| {},
            |site| refreshed.borrow_mut().push(site),
        )
        .await;

        assert_eq!(*calls.borrow(), Site::ALL.to_vec());
        assert_eq!(*refreshed.borrow(), Site::ALL.to_vec());
        assert_eq!(outcome.completed, Site::ALL.to_vec());
        assert_eq!(outcome.failure, None);
    }

    #[tokio::test]
    async fn test_server_failure_aborts_remaining_sites() {
        let failing = Site::ALL[2];
        let calls = Rc::new(RefCell::new(Vec::new()));

        let outcome = run(
            &Site::ALL,
            |site| {
                calls.borrow_mut().push(site);
                async move {
                    if site == failing {
                        Err(ApiError::Server {
                            status: 502,
                            detail: "scraper pool exhausted".to_string(),
                        })
                    } else {
                        Ok(())
                    }
                }
            },
            |_| {},
            |_| {},
        )
        .await;

        // No request goes out past the failing site.
        assert_eq!(*calls.borrow(), Site::ALL[..3].to_vec());
        assert_eq!(outcome.completed, Site::ALL[..2].to_vec());
        assert_eq!(
            outcome.failure,
            Some(RefreshFailure::Server {
                site: failing,
                detail: "scraper pool exhausted".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_network_failure_aborts_with_distinct_kind() {
        let outcome = run(
            &Site::ALL,
            |_| async { Err(ApiError::Network(transport_error().await)) },
            |_| {},
            |_| {},
        )
        .await;

        assert_eq!(outcome.completed, Vec::new());
        let failure = outcome.failure.expect("run must abort");
        match &failure {
            RefreshFailure::Network { site, message } => {
                assert_eq!(*site, Site::ALL[0]);
                assert!(!message.is_empty());
            }
            other => panic!("expected network failure, got {other:?}"),
        }
        assert_eq!(failure.title(), format!("Network error on {}", Site::ALL[0]));
    }

    #[tokio::test]
    async fn test_progress_tracks_active_site_and_clears_at_end() {
        let transitions = Rc::new(RefCell::new(Vec::new()));

        run(
            &[Site::TechCouncil, Site::RealtorsBoard],
            |_| async { Ok(()) },
            |current| transitions.borrow_mut().push(current),
            |_| {},
        )
        .await;

        assert_eq!(
            *transitions.borrow(),
            vec![
                Some(Site::TechCouncil),
                Some(Site::RealtorsBoard),
                None,
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_clears_even_after_abort() {
        let transitions = Rc::new(RefCell::new(Vec::new()));

        run(
            &Site::ALL,
            |_| async {
                Err(ApiError::Server {
                    status: 500,
                    detail: "boom".to_string(),
                })
            },
            |current| transitions.borrow_mut().push(current),
            |_| {},
        )
        .await;

        assert_eq!(*transitions.borrow(), vec![Some(Site::ALL[0]), None]);
    }

    #[test]
    fn test_scope_sites() {
        assert_eq!(RefreshScope::All.sites(), Site::ALL.to_vec());
        assert_eq!(
            RefreshScope::One(Site::TechCouncil).sites(),
            vec![Site::TechCouncil]
        );
        assert_eq!(
            RefreshScope::parse("tech_council"),
            RefreshScope::One(Site::TechCouncil)
        );
        assert_eq!(RefreshScope::parse("all"), RefreshScope::All);
    }
}
