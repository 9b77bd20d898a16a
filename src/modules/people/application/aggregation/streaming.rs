use futures::future;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use super::fetch_resource;
use crate::modules::people::domain::PersonInfo;
use crate::modules::people::infrastructure::swapi::{Film, Homeworld, Person, PersonInfoMapper};
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::{AppError, AppResult};

/// Stream rendition: the person is a one-item stream that is flat-mapped into
/// the joined homeworld and film streams.
///
/// At most `max_concurrent_films` film requests are in flight at once.
pub async fn fetch_person_info(
    fetcher: &dyn JsonFetcher,
    root_url: &str,
    max_concurrent_films: usize,
) -> AppResult<PersonInfo> {
    let width = max_concurrent_films.max(1);

    let aggregated = stream::once(fetch_resource::<Person>(fetcher, root_url))
        .and_then(move |person| async move {
            let films = stream::iter(person.films.iter().enumerate())
                .map(move |(index, url)| async move {
                    fetch_resource::<Film>(fetcher, url)
                        .await
                        .map(|film| (index, film))
                })
                .buffer_unordered(width)
                .try_collect::<Vec<(usize, Film)>>();

            let (homeworld, mut indexed) = future::try_join(
                fetch_resource::<Homeworld>(fetcher, &person.homeworld),
                films,
            )
            .await?;

            indexed.sort_unstable_by_key(|(index, _)| *index);
            debug!("Joined {} films for '{}'", indexed.len(), person.name);

            let films = indexed.into_iter().map(|(_, film)| film).collect();
            PersonInfoMapper::merge(person, homeworld, films)
        });

    futures::pin_mut!(aggregated);
    // `stream::once` always yields one item; the `None` arm never runs
    aggregated
        .try_next()
        .await?
        .ok_or_else(|| AppError::DecodeError(format!("No person emitted for {}", root_url)))
}
