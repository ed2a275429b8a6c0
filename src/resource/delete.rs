use reqwest::{Method, StatusCode};

use super::RESOURCES;
use crate::request::PathParams;
use crate::Link;

/// Outcome of a deletion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deletion {
    /// The resource is gone
    Done,
    /// The server deletes the resource in the background, the link gives the operation status
    InProgress(Link),
}

impl crate::Client {
    /// Deletes a file or directory, moving it to the trash.
    ///
    /// Directories may be deleted asynchronously, in which case the server answers with a
    /// link to follow the operation.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/delete.html).
    #[tracing::instrument(skip(self))]
    pub async fn delete_file(&self, disk_path: &str) -> crate::Result<Deletion> {
        let reply = self
            .send_request(Method::DELETE, RESOURCES, PathParams { path: disk_path })
            .await?;
        if reply.status == StatusCode::ACCEPTED {
            reply.json().map(Deletion::InProgress)
        } else {
            Ok(Deletion::Done)
        }
    }
}
