use super::{Resource, RESOURCES};
use crate::request::PathParams;

impl crate::Client {
    /// Gets the metadata of a file or directory.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/meta.html).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Api`] if the resource doesn't exist or the token is rejected,
    /// including when the server reports the error inside a successful response.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// let info = client.get_file_info("disk:/photo.png").await?;
    /// println!("{:?} bytes", info.size);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_file_info(&self, path: &str) -> crate::Result<Resource> {
        self.get_request(RESOURCES, PathParams { path }).await
    }
}
