//! Listing the content of a directory, page by page.

use super::{Resource, ResourceList, RESOURCES};
use crate::Error;

/// Number of entries requested per page
pub const PAGE_SIZE: u64 = 20;

#[derive(Debug, serde::Serialize)]
struct ListParams<'a> {
    path: &'a str,
    limit: u64,
    offset: u64,
}

impl crate::Client {
    /// Fetches a single page of a directory's content.
    ///
    /// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/meta.html).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when the response has no `_embedded` page,
    /// which is the case when `path` is a file.
    #[tracing::instrument(skip(self))]
    pub async fn get_file_list_page(
        &self,
        path: &str,
        limit: u64,
        offset: u64,
    ) -> crate::Result<ResourceList> {
        let resource: Resource = self
            .get_request(
                RESOURCES,
                ListParams {
                    path,
                    limit,
                    offset,
                },
            )
            .await?;
        resource.embedded.ok_or(Error::MissingField("_embedded"))
    }

    /// Lists the whole content of a directory, [`PAGE_SIZE`] entries at a time.
    ///
    /// The total number of entries is taken from the first page, entries added or removed
    /// while listing are not detected. A failing page is retried at the same offset following
    /// the client's [`RetryPolicy`](crate::RetryPolicy), every failure being logged with its
    /// parameters. When `files_only` is set, directories are filtered out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RetryExhausted`] with the last failure once the policy gives up.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yandex_disk::Client) -> yandex_disk::Result<()> {
    /// let files = client.get_file_list("disk:/photos", true).await?;
    /// println!("{} files", files.len());
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_file_list(&self, path: &str, files_only: bool) -> crate::Result<Vec<Resource>> {
        let mut offset: u64 = 0;
        let mut total: Option<u64> = None;
        let mut result = Vec::new();

        while total.map_or(true, |total| offset < total) {
            let (page_total, items) = self
                .retry
                .run(
                    || self.get_total_page(path, offset),
                    |attempt, err| {
                        tracing::warn!(
                            path,
                            limit = PAGE_SIZE,
                            offset,
                            attempt,
                            "unable to fetch page: {err}"
                        );
                    },
                )
                .await?;
            if total.is_none() {
                total = Some(page_total);
            }
            result.extend(items);
            offset += PAGE_SIZE;
        }

        if files_only {
            result.retain(Resource::is_file);
        }
        Ok(result)
    }

    /// A page that is only accepted when it holds the total number of entries
    async fn get_total_page(&self, path: &str, offset: u64) -> crate::Result<(u64, Vec<Resource>)> {
        let page = self.get_file_list_page(path, PAGE_SIZE, offset).await?;
        let total = page.total.ok_or(Error::MissingField("total"))?;
        Ok((total, page.items))
    }
}
