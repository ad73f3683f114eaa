//! City entity and its eager-loaded form.

use chrono::{DateTime, Utc};

use super::Country;

/// A city belonging to a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub city_name: String,
    pub country_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn new(
        id: i64,
        city_name: String,
        country_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            city_name,
            country_id,
            created_at,
            updated_at,
        }
    }
}

/// A city together with the country it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityWithCountry {
    pub city: City,
    pub country: Country,
}

/// Validated data for inserting or replacing a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub city_name: String,
    pub country_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_with_country() {
        let now = Utc::now();
        let country = Country::new(4, "Poland".to_string(), now, now);
        let city = City::new(9, "Katowice".to_string(), country.id, now, now);

        let loaded = CityWithCountry {
            city: city.clone(),
            country: country.clone(),
        };

        assert_eq!(loaded.city.country_id, loaded.country.id);
        assert_eq!(loaded.city.city_name, "Katowice");
    }
}
