//! Resource Client
//!
//! Typed list/save/delete over any `Transport`. Every mutation that reaches
//! the server is followed by a full re-fetch of the collection, whatever
//! status it got back; nothing is patched locally.

use crate::models::Record;

use super::request::ApiRequest;
use super::{ApiError, Transport};

/// Result of a mutation and the reload that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<R> {
    /// Set when the server answered the mutation with an error status
    pub rejected: Option<String>,
    /// The collection as re-fetched afterwards
    pub list: Result<Vec<R>, String>,
}

#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    transport: T,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>, String> {
        let text = self
            .transport
            .send(ApiRequest::list(R::COLLECTION))
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_str(&text).map_err(|e| e.to_string())
    }

    /// Send one mutating request, then reload the collection.
    ///
    /// An error status from the server still triggers the reload and is
    /// reported in `Mutation::rejected`. Only a request that never got a
    /// response is returned as `Err`, without reloading.
    pub async fn send_then_list<R: Record>(&self, request: ApiRequest) -> Result<Mutation<R>, String> {
        let rejected = match self.transport.send(request).await {
            Ok(_) => None,
            Err(ApiError::Status { message, .. }) => Some(message),
            Err(e @ ApiError::Network(_)) => return Err(e.to_string()),
        };
        Ok(Mutation {
            rejected,
            list: self.list::<R>().await,
        })
    }

    pub async fn delete_then_list<R: Record>(&self, id: u64) -> Result<Mutation<R>, String> {
        self.send_then_list::<R>(ApiRequest::delete(R::COLLECTION, id)).await
    }

    pub async fn upload_then_list<R: Record>(&self, file: web_sys::File) -> Result<Mutation<R>, String> {
        self.send_then_list::<R>(ApiRequest::upload(R::COLLECTION, file)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Body, Method};
    use crate::models::{GalleryImage, Link, Notice};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Records every request; GETs answer from `lists`. Mutations succeed
    /// unless the server rejects them or the network is down.
    #[derive(Clone, Default)]
    struct MockTransport {
        sent: Rc<RefCell<Vec<(Method, String)>>>,
        lists: Rc<HashMap<String, String>>,
        reject_mutations: bool,
        offline_mutations: bool,
    }

    impl MockTransport {
        fn with_list(path: &str, body: &str) -> Self {
            let mut lists = HashMap::new();
            lists.insert(path.to_string(), body.to_string());
            Self { lists: Rc::new(lists), ..Default::default() }
        }

        fn sent(&self) -> Vec<(Method, String)> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
            self.sent.borrow_mut().push((request.method, request.path.clone()));
            match request.method {
                Method::Get => self.lists.get(&request.path).cloned().ok_or_else(|| ApiError::Status {
                    status: 404,
                    message: "HTTP 404".to_string(),
                }),
                _ if self.offline_mutations => Err(ApiError::Network("Failed to fetch".to_string())),
                _ if self.reject_mutations => Err(ApiError::Status {
                    status: 404,
                    message: format!("{} {} -> HTTP 404", request.method, request.path),
                }),
                _ => Ok(r#"{"status": "ok"}"#.to_string()),
            }
        }
    }

    #[test]
    fn test_list_decodes_collection() {
        let transport = MockTransport::with_list("/notices", r#"[{"id": 1, "text": "a"}, {"id": 2, "text": "b"}]"#);
        let client = ResourceClient::new(transport.clone());

        let notices = block_on(client.list::<Notice>()).unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(transport.sent(), vec![(Method::Get, "/notices".to_string())]);
    }

    #[test]
    fn test_delete_issues_one_delete_then_one_refetch() {
        let transport = MockTransport::with_list("/links", "[]");
        let client = ResourceClient::new(transport.clone());

        let outcome = block_on(client.delete_then_list::<Link>(42)).unwrap();
        assert_eq!(outcome, Mutation { rejected: None, list: Ok(vec![]) });
        assert_eq!(
            transport.sent(),
            vec![(Method::Delete, "/links/42".to_string()), (Method::Get, "/links".to_string())]
        );
    }

    #[test]
    fn test_save_creates_or_updates_then_refetches() {
        let transport = MockTransport::with_list("/notices", r#"[{"id": 5, "text": "x"}]"#);
        let client = ResourceClient::new(transport.clone());

        let create = ApiRequest::save("notices", None, Body::Json(json!({"text": "x"})));
        let update = ApiRequest::save("notices", Some(5), Body::Json(json!({"text": "y"})));
        block_on(client.send_then_list::<Notice>(create)).unwrap();
        block_on(client.send_then_list::<Notice>(update)).unwrap();
        assert_eq!(
            transport.sent(),
            vec![
                (Method::Post, "/notices".to_string()),
                (Method::Get, "/notices".to_string()),
                (Method::Put, "/notices/5".to_string()),
                (Method::Get, "/notices".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejected_delete_still_refetches_once() {
        let transport = MockTransport {
            reject_mutations: true,
            ..MockTransport::with_list("/gallery", r#"[{"id": 7, "filename": "a.jpg"}]"#)
        };
        let client = ResourceClient::new(transport.clone());

        let outcome = block_on(client.delete_then_list::<GalleryImage>(7)).unwrap();
        assert_eq!(outcome.rejected, Some("DELETE /gallery/7 -> HTTP 404".to_string()));
        assert_eq!(outcome.list.unwrap().len(), 1);
        assert_eq!(
            transport.sent(),
            vec![(Method::Delete, "/gallery/7".to_string()), (Method::Get, "/gallery".to_string())]
        );
    }

    #[test]
    fn test_rejected_update_still_refetches() {
        let transport = MockTransport {
            reject_mutations: true,
            ..MockTransport::with_list("/links", r#"[{"id": 3, "title": "Old", "url": "https://a.example"}]"#)
        };
        let client = ResourceClient::new(transport.clone());

        let update = ApiRequest::save("links", Some(3), Body::Json(json!({"title": "New", "url": "https://b.example"})));
        let outcome = block_on(client.send_then_list::<Link>(update)).unwrap();
        assert!(outcome.rejected.is_some());
        assert_eq!(outcome.list.unwrap()[0].title, "Old");
        assert_eq!(transport.sent().len(), 2);
    }

    #[test]
    fn test_network_failure_skips_refetch() {
        let transport = MockTransport { offline_mutations: true, ..MockTransport::with_list("/notices", "[]") };
        let client = ResourceClient::new(transport.clone());

        let result = block_on(client.delete_then_list::<Notice>(9));
        assert_eq!(result, Err("network error: Failed to fetch".to_string()));
        assert_eq!(transport.sent(), vec![(Method::Delete, "/notices/9".to_string())]);
    }

    #[test]
    fn test_malformed_list_is_an_error() {
        let transport = MockTransport::with_list("/notices", "<html>oops</html>");
        let client = ResourceClient::new(transport);
        assert!(block_on(client.list::<Notice>()).is_err());
    }
}
