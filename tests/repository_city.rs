use freight_registry::AppError;
use freight_registry::domain::entities::{NewCity, NewCountry};
use freight_registry::domain::repositories::{CityRepository, CountryRepository};
use freight_registry::infrastructure::persistence::{PgCityRepository, PgCountryRepository};
use sqlx::PgPool;
use std::sync::Arc;

struct Repos {
    cities: PgCityRepository,
    countries: PgCountryRepository,
}

fn repos(pool: PgPool) -> Repos {
    let pool = Arc::new(pool);
    Repos {
        cities: PgCityRepository::new(pool.clone()),
        countries: PgCountryRepository::new(pool),
    }
}

async fn country(repos: &Repos, name: &str) -> i64 {
    repos
        .countries
        .create(NewCountry {
            country_name: name.to_string(),
        })
        .await
        .unwrap()
        .id
}

fn new_city(name: &str, country_id: i64) -> NewCity {
    NewCity {
        city_name: name.to_string(),
        country_id,
    }
}

#[sqlx::test]
async fn test_list_with_country(pool: PgPool) {
    let repos = repos(pool);
    let poland = country(&repos, "Poland").await;
    let germany = country(&repos, "Germany").await;

    repos.cities.create(new_city("Katowice", poland)).await.unwrap();
    repos.cities.create(new_city("Berlin", germany)).await.unwrap();

    let cities = repos.cities.list_with_country().await.unwrap();

    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].city.city_name, "Katowice");
    assert_eq!(cities[0].country.country_name, "Poland");
    assert_eq!(cities[1].city.city_name, "Berlin");
    assert_eq!(cities[1].country.id, germany);
}

#[sqlx::test]
async fn test_find_with_country(pool: PgPool) {
    let repos = repos(pool);
    let poland = country(&repos, "Poland").await;
    let city = repos.cities.create(new_city("Katowice", poland)).await.unwrap();

    let loaded = repos.cities.find_with_country(city.id).await.unwrap().unwrap();

    assert_eq!(loaded.city, city);
    assert_eq!(loaded.country.id, poland);
    assert!(repos.cities.find_with_country(city.id + 1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_name_taken(pool: PgPool) {
    let repos = repos(pool);
    let poland = country(&repos, "Poland").await;
    let city = repos.cities.create(new_city("Katowice", poland)).await.unwrap();

    assert!(repos.cities.name_taken("Katowice", None).await.unwrap());
    assert!(!repos.cities.name_taken("Katowice", Some(city.id)).await.unwrap());
}

#[sqlx::test]
async fn test_unknown_country_maps_to_field_error(pool: PgPool) {
    let repos = repos(pool);

    let err = repos.cities.create(new_city("Katowice", 404)).await.unwrap_err();

    let errors = err.field_errors().expect("validation error");
    assert_eq!(
        errors.get("country").unwrap(),
        ["The selected country is invalid."]
    );
}

#[sqlx::test]
async fn test_update(pool: PgPool) {
    let repos = repos(pool);
    let poland = country(&repos, "Poland").await;
    let germany = country(&repos, "Germany").await;
    let city = repos.cities.create(new_city("Breslau", germany)).await.unwrap();

    let updated = repos
        .cities
        .update(city.id, new_city("Wroclaw", poland))
        .await
        .unwrap();

    assert_eq!(updated.city_name, "Wroclaw");
    assert_eq!(updated.country_id, poland);

    let missing = repos.cities.update(city.id + 1, new_city("Opole", poland)).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
}

#[sqlx::test]
async fn test_country_delete_restricted_while_referenced(pool: PgPool) {
    let repos = repos(pool);
    let poland = country(&repos, "Poland").await;
    let city = repos.cities.create(new_city("Katowice", poland)).await.unwrap();

    assert!(matches!(
        repos.countries.delete(poland).await,
        Err(AppError::DeleteFailed)
    ));

    assert!(repos.cities.delete(city.id).await.unwrap());
    assert!(repos.countries.delete(poland).await.unwrap());
}
