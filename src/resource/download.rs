use std::path::Path;

use reqwest::Method;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::request::{ensure_success, PathParams};
use crate::{Error, Link};

impl crate::Client {
    /// Asks for a one-shot link to download a file.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/content.html).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerdeJson`] when the response holds no `href`.
    #[tracing::instrument(skip(self))]
    pub async fn get_file_download_url(&self, path: &str) -> crate::Result<Link> {
        self.acquire_link(Method::GET, "resources/download", PathParams { path })
            .await
    }

    async fn open_download(&self, path: &str) -> crate::Result<reqwest::Response> {
        let link = self.get_file_download_url(path).await?;
        let res = self
            .authorize(link.into_request(&self.inner, Method::GET))
            .send()
            .await?;
        ensure_success(res).await
    }

    /// Downloads a file into the given writer, returning the number of bytes written.
    #[tracing::instrument(skip(self, writer))]
    pub async fn download_file_to<W: AsyncWrite + Unpin>(
        &self,
        path: &str,
        writer: W,
    ) -> crate::Result<u64> {
        let res = self.open_download(path).await?;
        write_body(res, writer).await
    }

    /// Downloads a file to `local_path`, creating or truncating it.
    ///
    /// The local file is only created once the server started sending the content.
    /// A transfer failing midway leaves a partial file behind.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// let size = client.download_file("disk:/photo.png", "./photo.png").await?;
    /// println!("downloaded {size} bytes");
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, local_path))]
    pub async fn download_file(
        &self,
        remote_path: &str,
        local_path: impl AsRef<Path>,
    ) -> crate::Result<u64> {
        let res = self.open_download(remote_path).await?;
        let file = tokio::fs::File::create(local_path)
            .await
            .map_err(Error::Download)?;
        write_body(res, file).await
    }
}

async fn write_body<W: AsyncWrite + Unpin>(
    mut res: reqwest::Response,
    mut writer: W,
) -> crate::Result<u64> {
    let mut size = 0;
    while let Some(chunk) = res.chunk().await? {
        writer.write_all(&chunk).await.map_err(Error::Download)?;
        size += chunk.len() as u64;
    }
    writer.flush().await.map_err(Error::Download)?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use mockito::Matcher;

    async fn mock_link(server: &mut mockito::Server, path: &str) -> mockito::Mock {
        let body = serde_json::json!({
            "href": format!("{}/download-target/abc", server.url()),
            "method": "GET",
            "templated": false
        });
        server
            .mock("GET", "/resources/download")
            .match_query(Matcher::UrlEncoded("path".into(), path.into()))
            .match_header("authorization", "OAuth my-token")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn link_success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = mock_link(&mut server, "disk:/foo.txt").await;
        let client = crate::tests::client(&server);
        let link = client.get_file_download_url("disk:/foo.txt").await.unwrap();
        assert_eq!(link.href, format!("{}/download-target/abc", server.url()));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn link_without_href() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/resources/download")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "method": "GET", "templated": false }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let error = client.get_file_download_url("disk:/foo.txt").await.unwrap_err();
        assert!(matches!(error, Error::SerdeJson(_)));
    }

    #[tokio::test]
    async fn into_writer() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m_link = mock_link(&mut server, "disk:/foo.txt").await;
        let m_content = server
            .mock("GET", "/download-target/abc")
            .with_status(200)
            .with_body("hello world!")
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let mut buffer: Vec<u8> = Vec::new();
        let size = client
            .download_file_to("disk:/foo.txt", &mut buffer)
            .await
            .unwrap();
        assert_eq!(size, 12);
        assert_eq!(buffer, b"hello world!");
        m_link.assert_async().await;
        m_content.assert_async().await;
    }

    #[tokio::test]
    async fn into_file() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m_link = mock_link(&mut server, "disk:/foo.bin").await;
        let content: Vec<u8> = (0..=255u8).cycle().take(100_000).collect();
        let _m_content = server
            .mock("GET", "/download-target/abc")
            .with_status(200)
            .with_body(&content)
            .create_async()
            .await;
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("foo.bin");
        std::fs::write(&target, b"previous content that is longer than nothing").unwrap();
        let client = crate::tests::client(&server);
        let size = client.download_file("disk:/foo.bin", &target).await.unwrap();
        assert_eq!(size, 100_000);
        assert_eq!(std::fs::read(&target).unwrap(), content);
    }

    #[tokio::test]
    async fn expired_link() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let _m_link = mock_link(&mut server, "disk:/foo.txt").await;
        let _m_content = server
            .mock("GET", "/download-target/abc")
            .with_status(410)
            .create_async()
            .await;
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("foo.txt");
        let client = crate::tests::client(&server);
        let error = client.download_file("disk:/foo.txt", &target).await.unwrap_err();
        assert_eq!(error.as_api().unwrap().status, 410);
        assert!(!target.exists());
    }
}
