use serde::Serialize;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Minimal container for a completed route. This holds only the information
/// required to report the route back to the user.
#[derive(Debug, Serialize, PartialEq)]
pub struct Route {
    pub stops: Vec<String>,
    pub total_distance: u64,
    pub id: u64,
}

impl Route {
    /// Create a completed route from the ordered list of stops and the total
    /// distance travelled. The id is derived from the stop sequence, so two
    /// routes passing through the same towns in the same order share an id
    pub fn new(stops: Vec<String>, total_distance: u64) -> Route {
        let mut hasher = DefaultHasher::new();
        stops.hash(&mut hasher);
        let id = hasher.finish();

        Route {
            stops: stops,
            total_distance: total_distance,
            id: id,
        }
    }

    /// Render the route for the console, each stop joined by an arrow and
    /// closed off with a terminator so the user can tell the route is
    /// complete
    pub fn describe(&self) -> String {
        let mut description = self.stops.join(" -> ");
        description.push_str(" -> Done");
        description
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    /// Generate a basic route which can be used for testing
    fn get_test_route() -> Route {
        Route::new(
            vec![
                "Pune".to_string(),
                "Satara".to_string(),
                "Hubali".to_string(),
            ],
            3,
        )
    }

    /// Routes over the same stops should always share an id
    #[test]
    fn test_new_route_id_stable() {
        let result = get_test_route().id;
        let target = get_test_route().id;

        assert_eq!(result, target);
    }

    /// Routes over different stops should get different ids
    #[test]
    fn test_new_route_id_differs() {
        let other = Route::new(
            vec!["Pune".to_string(), "Solapur".to_string()],
            8,
        );

        assert_ne!(get_test_route().id, other.id);
    }

    /// Check the console rendering of a multi-stop route
    #[test]
    fn test_describe() {
        let result = get_test_route().describe();

        let target = "Pune -> Satara -> Hubali -> Done".to_string();

        assert_eq!(result, target);
    }

    /// A route which starts and ends at the same town renders as a single
    /// stop
    #[test]
    fn test_describe_single_stop() {
        let test_route = Route::new(vec!["Pune".to_string()], 0);

        let result = test_route.describe();

        let target = "Pune -> Done".to_string();

        assert_eq!(result, target);
    }

    /// Completed routes serialize with their stops, total distance and id
    #[test]
    fn test_route_serializes() {
        let test_route = get_test_route();

        let result = serde_json::to_value(&test_route)
            .expect("Route should serialize!");

        assert_eq!(result["stops"][0], "Pune");
        assert_eq!(result["total_distance"], 3);
        assert_eq!(result["id"], test_route.id);
    }
}
