use reqwest::Method;

use crate::error::absent_on_conflict;

#[derive(Debug, serde::Serialize)]
struct MoveParams<'a> {
    from: &'a str,
    path: &'a str,
    overwrite: bool,
}

impl crate::Client {
    /// Moves or renames a file or directory.
    ///
    /// Returns `Ok(false)` when the destination already exists and `overwrite` is not set,
    /// the server's description being logged.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/move.html).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// let moved = client.move_file("disk:/foo.txt", "disk:/bar/foo.txt", false).await?;
    /// assert!(moved);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn move_file(&self, from: &str, to: &str, overwrite: bool) -> crate::Result<bool> {
        let result = self
            .send_request(
                Method::POST,
                "resources/move",
                MoveParams {
                    from,
                    path: to,
                    overwrite,
                },
            )
            .await;
        absent_on_conflict(result).map(|reply| reply.is_some())
    }
}
