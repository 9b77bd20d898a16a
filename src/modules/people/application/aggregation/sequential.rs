use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use super::fetch_resource;
use crate::modules::people::domain::PersonInfo;
use crate::modules::people::infrastructure::swapi::{Film, Homeworld, Person, PersonInfoMapper};
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::AppResult;

/// `async`/`await` rendition: await the person, then `try_join!` the
/// homeworld with the film fan-out.
pub async fn fetch_person_info(fetcher: &dyn JsonFetcher, root_url: &str) -> AppResult<PersonInfo> {
    let person: Person = fetch_resource(fetcher, root_url).await?;
    debug!(
        "Fetched '{}', resolving homeworld and {} films",
        person.name,
        person.films.len()
    );

    let (homeworld, films) = tokio::try_join!(
        fetch_resource::<Homeworld>(fetcher, &person.homeworld),
        fetch_films(fetcher, &person.films),
    )?;

    PersonInfoMapper::merge(person, homeworld, films)
}

async fn fetch_films(fetcher: &dyn JsonFetcher, urls: &[String]) -> AppResult<Vec<Film>> {
    let mut pending: FuturesUnordered<_> = urls
        .iter()
        .enumerate()
        .map(move |(index, url)| async move {
            fetch_resource::<Film>(fetcher, url)
                .await
                .map(|film| (index, film))
        })
        .collect();

    let mut slots: Vec<Option<Film>> = (0..urls.len()).map(|_| None).collect();
    while let Some(result) = pending.next().await {
        let (index, film) = result?;
        debug!("Film #{} '{}' arrived", index, film.title);
        slots[index] = Some(film);
    }

    // Every index was filled exactly once or we returned early above
    Ok(slots.into_iter().flatten().collect())
}
