use crate::types::{Candidate, ServerDescriptor};

/// Filter the catalog down to an ordered list of measurement candidates.
///
/// With `cities`, each requested city is matched against every descriptor
/// (country equality plus name substring, both case-insensitive) and the
/// candidate keeps the requested city string as its label. A descriptor
/// matching several requested cities is emitted once per city. Without
/// cities, every descriptor in the country becomes a candidate under its
/// own name, in catalog order.
///
/// An empty return is a valid "no results" outcome, never an error.
pub fn filter_candidates(
    catalog: &[ServerDescriptor],
    country: &str,
    cities: &[String],
) -> Vec<Candidate> {
    let country_lc = country.to_lowercase();
    let mut candidates = Vec::new();

    if !cities.is_empty() {
        for city in cities {
            let city_lc = city.to_lowercase();
            for server in catalog {
                if server.country.to_lowercase() == country_lc
                    && server.name.to_lowercase().contains(&city_lc)
                {
                    candidates.push(Candidate::new(city.clone(), server.clone()));
                }
            }
        }
    } else {
        for server in catalog {
            if server.country.to_lowercase() == country_lc {
                candidates.push(Candidate::new(server.name.clone(), server.clone()));
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(name: &str, country: &str) -> ServerDescriptor {
        ServerDescriptor {
            name: name.to_string(),
            sponsor: format!("ISP-{}", name),
            country: country.to_string(),
            host: format!("{}.example.com:8080", name.to_lowercase()),
        }
    }

    fn pk_catalog() -> Vec<ServerDescriptor> {
        vec![
            server("Karachi", "Pakistan"),
            server("Lahore", "Pakistan"),
            server("Dubai", "United Arab Emirates"),
        ]
    }

    #[test]
    fn test_country_only_keeps_catalog_order_and_own_names() {
        let catalog = pk_catalog();
        let candidates = filter_candidates(&catalog, "Pakistan", &[]);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label, "Karachi");
        assert_eq!(candidates[1].label, "Lahore");
        assert_eq!(candidates[0].server.host, "karachi.example.com:8080");
    }

    #[test]
    fn test_city_filter_labels_with_requested_city() {
        let catalog = pk_catalog();
        let cities = vec!["Karachi".to_string()];
        let candidates = filter_candidates(&catalog, "Pakistan", &cities);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label, "Karachi");
        assert_eq!(candidates[0].server.name, "Karachi");
    }

    #[test]
    fn test_city_match_is_case_insensitive_substring() {
        let catalog = vec![server("Greater Karachi Area", "Pakistan")];
        let cities = vec!["karachi".to_string()];
        let candidates = filter_candidates(&catalog, "pakistan", &cities);

        assert_eq!(candidates.len(), 1);
        // Label is the requested string, not the descriptor name
        assert_eq!(candidates[0].label, "karachi");
    }

    #[test]
    fn test_descriptor_emitted_once_per_matching_city() {
        let catalog = vec![server("Karachi-Lahore Exchange", "Pakistan")];
        let cities = vec!["Karachi".to_string(), "Lahore".to_string()];
        let candidates = filter_candidates(&catalog, "Pakistan", &cities);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label, "Karachi");
        assert_eq!(candidates[1].label, "Lahore");
        assert_eq!(candidates[0].server.host, candidates[1].server.host);
    }

    #[test]
    fn test_city_order_is_outer_loop() {
        let catalog = pk_catalog();
        let cities = vec!["Lahore".to_string(), "Karachi".to_string()];
        let candidates = filter_candidates(&catalog, "Pakistan", &cities);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].label, "Lahore");
        assert_eq!(candidates[1].label, "Karachi");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = pk_catalog();
        assert!(filter_candidates(&catalog, "Japan", &[]).is_empty());

        let cities = vec!["Islamabad".to_string()];
        assert!(filter_candidates(&catalog, "Pakistan", &cities).is_empty());
        assert!(filter_candidates(&[], "Pakistan", &[]).is_empty());
    }

    #[test]
    fn test_country_must_match_even_when_city_does() {
        let catalog = vec![server("Karachi", "United Arab Emirates")];
        let cities = vec!["Karachi".to_string()];
        assert!(filter_candidates(&catalog, "Pakistan", &cities).is_empty());
    }
}
