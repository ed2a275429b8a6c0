//! Resources needed to upload a file

use std::path::Path;

use reqwest::header::CONTENT_LENGTH;
use reqwest::Method;

use crate::error::absent_on_conflict;
use crate::request::ensure_success;
use crate::{Error, Link};

#[derive(Debug, serde::Serialize)]
struct UploadParams<'a> {
    path: &'a str,
    overwrite: bool,
}

impl crate::Client {
    /// Asks for a one-shot link to upload a file to `disk_path`.
    ///
    /// Returns `Ok(None)` when the server answers with a conflict, usually because the file
    /// already exists and `overwrite` is not set. The server's description is logged.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/upload.html).
    #[tracing::instrument(skip(self))]
    pub async fn get_file_upload_url(
        &self,
        disk_path: &str,
        overwrite: bool,
    ) -> crate::Result<Option<Link>> {
        let result = self
            .acquire_link(
                Method::GET,
                "resources/upload",
                UploadParams {
                    path: disk_path,
                    overwrite,
                },
            )
            .await;
        absent_on_conflict(result)
    }

    /// Uploads the content of a local file to `disk_path`, in a single streamed request.
    ///
    /// Returns `Ok(false)` without reading the local file when the destination already exists
    /// and `overwrite` is not set.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// if !client.upload_file("./photo.png", "disk:/photo.png", false).await? {
    ///     eprintln!("already uploaded");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, local_path))]
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        disk_path: &str,
        overwrite: bool,
    ) -> crate::Result<bool> {
        let link = match self.get_file_upload_url(disk_path, overwrite).await? {
            Some(link) => link,
            None => return Ok(false),
        };
        let file = tokio::fs::File::open(local_path)
            .await
            .map_err(Error::Upload)?;
        let size = file.metadata().await.map_err(Error::Upload)?.len();
        let req = link
            .into_request(&self.inner, Method::PUT)
            .header(CONTENT_LENGTH, size)
            .body(reqwest::Body::from(file));
        ensure_success(req.send().await?).await?;
        Ok(true)
    }

    /// Uploads an in-memory or streamed body to `disk_path`.
    ///
    /// Behaves like [`upload_file`](crate::Client::upload_file).
    #[tracing::instrument(skip(self, body))]
    pub async fn upload_body(
        &self,
        disk_path: &str,
        body: impl Into<reqwest::Body>,
        overwrite: bool,
    ) -> crate::Result<bool> {
        let link = match self.get_file_upload_url(disk_path, overwrite).await? {
            Some(link) => link,
            None => return Ok(false),
        };
        let req = link.into_request(&self.inner, Method::PUT).body(body);
        ensure_success(req.send().await?).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use mockito::Matcher;

    const CONFLICT: &str = r#"{
    "message": "Ресурс \"disk:/foo.txt\" уже существует.",
    "description": "Resource \"disk:/foo.txt\" already exists.",
    "error": "DiskResourceAlreadyExistsError"
}"#;

    fn link_body(server: &mockito::Server) -> String {
        serde_json::json!({
            "operation_id": "d80c269ce4eb16c0207f0a15t4a31415313452f9e950cd9576f36b1146ee0e42",
            "href": format!("{}/upload-target/abc", server.url()),
            "method": "PUT",
            "templated": false
        })
        .to_string()
    }

    #[tokio::test]
    async fn link_success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("path".into(), "disk:/foo.txt".into()),
                Matcher::UrlEncoded("overwrite".into(), "true".into()),
            ]))
            .match_header("authorization", "OAuth my-token")
            .with_status(200)
            .with_body(link_body(&server))
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let link = client
            .get_file_upload_url("disk:/foo.txt", true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(link.method.as_deref(), Some("PUT"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn link_conflict() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("path".into(), "disk:/foo.txt".into()),
                Matcher::UrlEncoded("overwrite".into(), "false".into()),
            ]))
            .with_status(409)
            .with_body(CONFLICT)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let link = client
            .get_file_upload_url("disk:/foo.txt", false)
            .await
            .unwrap();
        assert!(link.is_none());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn upload_local_file() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m_link = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(link_body(&server))
            .create_async()
            .await;
        let m_put = server
            .mock("PUT", "/upload-target/abc")
            .match_header("content-length", "12")
            .match_body("hello world!")
            .with_status(201)
            .create_async()
            .await;
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("foo.txt");
        std::fs::write(&source, "hello world!").unwrap();
        let client = crate::tests::client(&server);
        let uploaded = client
            .upload_file(&source, "disk:/foo.txt", false)
            .await
            .unwrap();
        assert!(uploaded);
        m_link.assert_async().await;
        m_put.assert_async().await;
    }

    #[tokio::test]
    async fn upload_conflict() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m_link = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::Any)
            .with_status(409)
            .with_body(CONFLICT)
            .create_async()
            .await;
        let m_put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        // the local file doesn't exist, it must not be opened
        let uploaded = client
            .upload_file("/this/file/does/not/exist", "disk:/foo.txt", false)
            .await
            .unwrap();
        assert!(!uploaded);
        m_link.assert_async().await;
        m_put.assert_async().await;
    }

    #[tokio::test]
    async fn upload_missing_local_file() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m_link = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(link_body(&server))
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let error = client
            .upload_file("/this/file/does/not/exist", "disk:/foo.txt", false)
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Upload(_)));
    }

    #[tokio::test]
    async fn upload_rejected() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m_link = server
            .mock("GET", "/resources/upload")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(link_body(&server))
            .create_async()
            .await;
        let _m_put = server
            .mock("PUT", "/upload-target/abc")
            .with_status(507)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let error = client
            .upload_body("disk:/foo.txt", "hello world!", false)
            .await
            .unwrap_err();
        assert_eq!(error.as_api().unwrap().status, 507);
    }
}
