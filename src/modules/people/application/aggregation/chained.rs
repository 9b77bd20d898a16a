use futures::future::{self, TryFutureExt};
use std::future::Future;

use super::fetch_resource;
use crate::modules::people::domain::PersonInfo;
use crate::modules::people::infrastructure::swapi::{Film, Homeworld, Person, PersonInfoMapper};
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::AppResult;

/// Combinator rendition, built by chaining futures instead of awaiting them.
///
/// `try_join_all` polls the film fetches concurrently and hands back results
/// in input order, which keeps film `i` aligned with reference `i`.
pub fn fetch_person_info<'a>(
    fetcher: &'a dyn JsonFetcher,
    root_url: &'a str,
) -> impl Future<Output = AppResult<PersonInfo>> + 'a {
    fetch_resource::<Person>(fetcher, root_url).and_then(move |person| {
        let homeworld = fetch_owned::<Homeworld>(fetcher, person.homeworld.clone());
        let films = future::try_join_all(
            person
                .films
                .iter()
                .cloned()
                .map(move |url| fetch_owned::<Film>(fetcher, url)),
        );

        future::try_join(homeworld, films).and_then(move |(homeworld, films)| {
            future::ready(PersonInfoMapper::merge(person, homeworld, films))
        })
    })
}

async fn fetch_owned<T: serde::de::DeserializeOwned>(
    fetcher: &dyn JsonFetcher,
    url: String,
) -> AppResult<T> {
    fetch_resource(fetcher, &url).await
}
