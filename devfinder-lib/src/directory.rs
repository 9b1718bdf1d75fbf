//! Access to the remote profile directory.

use std::future::Future;

use reqwest::{
    Client, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use tracing::debug;

use crate::{
    Error, LookupError, Result,
    config::DirectoryConfig,
    profile::{Handle, Profile, RawProfile},
};

/// Something that can resolve a [`Handle`] into a [`Profile`].
pub trait ProfileDirectory {
    fn fetch_profile(
        &self,
        handle: &Handle,
    ) -> impl Future<Output = std::result::Result<Profile, LookupError>> + Send;
}

/// HTTP client for a GitHub-compatible `/users/{handle}` endpoint.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(cfg: &DirectoryConfig) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBaseUrl {
            url: cfg.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&cfg.base_url).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let mut builder = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// The endpoint for `handle`. The handle always lands in a single path segment.
    pub fn user_url(&self, handle: &Handle) -> Url {
        let mut url = self.base_url.clone();
        // Can't fail, `new` rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(handle.as_str());
        }
        url
    }

    /// Download the raw bytes of an avatar image.
    pub async fn fetch_avatar(&self, url: &str) -> std::result::Result<Vec<u8>, LookupError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| LookupError::from_cause(&err))?
            .bytes()
            .await
            .map_err(|err| LookupError::from_cause(&err))?;

        Ok(bytes.to_vec())
    }
}

impl ProfileDirectory for DirectoryClient {
    async fn fetch_profile(&self, handle: &Handle) -> std::result::Result<Profile, LookupError> {
        let url = self.user_url(handle);
        debug!("Looking up {handle} at {url}");

        let response = self.client.get(url).send().await.map_err(|err| {
            debug!("Lookup of {handle} failed to send: {err}");
            LookupError::from_cause(&err)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Lookup of {handle} answered with {status}");
            return Err(LookupError::no_results());
        }

        let raw = response.json::<RawProfile>().await.map_err(|err| {
            debug!("Lookup of {handle} returned an unreadable body: {err}");
            LookupError::from_cause(&err)
        })?;

        Ok(raw.into())
    }
}

#[cfg(test)]
mod test {
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::{ProfileLookup, view::LookupView};

    async fn user(Path(login): Path<String>) -> Response {
        match login.as_str() {
            "octocat" => Json(json!({
                "login": "octocat",
                "followers": 10,
                "following": 2,
                "public_repos": 8,
                "created_at": "2011-01-25T18:44:36Z"
            }))
            .into_response(),
            "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
            "limited" => StatusCode::FORBIDDEN.into_response(),
            "crashing" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn avatar(Path(login): Path<String>) -> Response {
        if login == "octocat" {
            vec![0x89_u8, b'P', b'N', b'G'].into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    }

    fn client(base_url: String) -> DirectoryClient {
        DirectoryClient::new(&DirectoryConfig {
            base_url,
            ..DirectoryConfig::default()
        })
        .unwrap()
    }

    async fn serve() -> (DirectoryClient, String) {
        let router = Router::new()
            .route("/users/{login}", get(user))
            .route("/avatars/{login}", get(avatar));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());

        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        (client(base_url.clone()), base_url)
    }

    fn handle(input: &str) -> Handle {
        Handle::parse(input).unwrap()
    }

    #[tokio::test]
    async fn test_found() {
        let (client, _) = serve().await;

        let profile = client.fetch_profile(&handle("octocat")).await.unwrap();

        assert_eq!(profile.login(), "octocat");
        assert_eq!(profile.public_repos(), 8);
        assert_eq!(profile.followers(), 10);
        assert_eq!(profile.following(), 2);
    }

    #[tokio::test]
    async fn test_not_found() {
        let (client, _) = serve().await;

        let err = client
            .fetch_profile(&handle("no_such_user_xyz"))
            .await
            .unwrap_err();

        assert_eq!(err, LookupError::no_results());
    }

    #[tokio::test]
    async fn test_every_failure_status_is_no_results() {
        let (client, _) = serve().await;

        for login in ["limited", "crashing"] {
            let err = client.fetch_profile(&handle(login)).await.unwrap_err();
            assert_eq!(err, LookupError::no_results());
        }
    }

    #[tokio::test]
    async fn test_unreadable_body() {
        let (client, _) = serve().await;

        let err = client.fetch_profile(&handle("broken")).await.unwrap_err();

        assert_ne!(err, LookupError::no_results());
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_directory() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let err = client(base_url)
            .fetch_profile(&handle("octocat"))
            .await
            .unwrap_err();

        assert_ne!(err, LookupError::no_results());
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn test_avatar() {
        let (client, base_url) = serve().await;

        let bytes = client
            .fetch_avatar(&format!("{base_url}avatars/octocat"))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);

        assert!(
            client
                .fetch_avatar(&format!("{base_url}avatars/ghost"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_lookup_end_to_end() {
        let (client, _) = serve().await;
        let mut lookup = ProfileLookup::default();

        lookup.set_query("octocat");
        let (generation, result) = lookup.submit().unwrap().run(&client).await;
        assert!(lookup.settle(generation, result));

        let LookupView::Profile(card) = lookup.view() else {
            panic!("expected a profile, got {:?}", lookup.view());
        };
        assert_eq!(card.joined, "Joined 25 Jan 2011");
        assert_eq!(card.stats.map(|cell| cell.value), [8, 10, 2]);
        assert_eq!(card.handle, "@octocat");

        lookup.set_query("no_such_user_xyz");
        let (generation, result) = lookup.submit().unwrap().run(&client).await;
        assert!(lookup.settle(generation, result));

        assert_eq!(lookup.view(), LookupView::Error(&LookupError::no_results()));
        assert!(lookup.profile().is_none());
    }

    #[test]
    fn test_handle_is_one_segment() {
        let client = client("https://api.example.com/".into());

        assert_eq!(
            client.user_url(&handle(" a b/c ")).as_str(),
            "https://api.example.com/users/a%20b%2Fc"
        );
    }

    #[test]
    fn test_base_url_with_path() {
        for base_url in ["https://ghe.example.com/api/v3", "https://ghe.example.com/api/v3/"] {
            let client = client(base_url.into());
            assert_eq!(
                client.user_url(&handle("octocat")).as_str(),
                "https://ghe.example.com/api/v3/users/octocat"
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        for base_url in ["not a url", "mailto:someone@example.com"] {
            let result = DirectoryClient::new(&DirectoryConfig {
                base_url: base_url.into(),
                ..DirectoryConfig::default()
            });
            assert!(matches!(result, Err(Error::InvalidBaseUrl { .. })));
        }
    }
}
