use reqwest::Method;

use crate::request::PathParams;
use crate::Link;

impl crate::Client {
    /// Publishes a file or directory, making it reachable by anyone through its public url.
    ///
    /// Returns the link to the published resource's metadata.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/publish.html).
    #[tracing::instrument(skip(self))]
    pub async fn publish_object(&self, path: &str) -> crate::Result<Link> {
        self.acquire_link(Method::PUT, "resources/publish", PathParams { path })
            .await
    }

    /// Publishes a file or directory and returns its public url.
    ///
    /// Returns `Ok(None)` without looking the resource up when the API refuses to publish it,
    /// when the lookup is refused, or when the resource has no public url once published.
    /// Both steps are separate requests: the url is whatever the server reports at the time
    /// of the second one.
    ///
    /// # Errors
    ///
    /// Failures the server didn't explain, such as an outage page or a transport error,
    /// are returned as is.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// if let Some(url) = client.publish_object_and_get_link("disk:/photo.png").await? {
    ///     println!("shared at {url}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn publish_object_and_get_link(&self, path: &str) -> crate::Result<Option<String>> {
        match self.publish_object(path).await {
            Ok(_) => {}
            Err(err) if err.is_refusal() => {
                tracing::debug!("unable to publish: {err}");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }
        match self.get_file_info(path).await {
            Ok(info) => Ok(info.public_url),
            Err(err) if err.is_refusal() => {
                tracing::debug!("unable to get public url: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
