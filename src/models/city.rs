use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity and location of a city in the collection roster.
///
/// Tier follows the Indian census convention: tier 1 for the large
/// metropolitan areas, tier 2 for everything else in the roster.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct City {
    #[validate(length(min = 1))]
    pub name: String,

    pub state: String,

    #[validate(range(min = 1, max = 2))]
    pub tier: u8,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl City {
    pub fn new(name: &str, state: &str, tier: u8, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            state: state.to_string(),
            tier,
            latitude,
            longitude,
        }
    }
}

/// (name, state, tier, latitude, longitude)
const CITY_ROSTER: &[(&str, &str, u8, f64, f64)] = &[
    ("Mumbai", "Maharashtra", 1, 19.08, 72.88),
    ("Delhi", "Delhi", 1, 28.61, 77.21),
    ("Bangalore", "Karnataka", 1, 12.97, 77.59),
    ("Hyderabad", "Telangana", 1, 17.39, 78.49),
    ("Ahmedabad", "Gujarat", 1, 23.03, 72.58),
    ("Chennai", "Tamil Nadu", 1, 13.08, 80.27),
    ("Kolkata", "West Bengal", 1, 22.57, 88.36),
    ("Pune", "Maharashtra", 1, 18.52, 73.86),
    ("Surat", "Gujarat", 2, 21.17, 72.83),
    ("Jaipur", "Rajasthan", 2, 26.91, 75.79),
    ("Lucknow", "Uttar Pradesh", 2, 26.85, 80.95),
    ("Kanpur", "Uttar Pradesh", 2, 26.45, 80.33),
    ("Nagpur", "Maharashtra", 2, 21.15, 79.09),
    ("Indore", "Madhya Pradesh", 2, 22.72, 75.86),
    ("Thane", "Maharashtra", 2, 19.22, 72.97),
    ("Bhopal", "Madhya Pradesh", 2, 23.26, 77.41),
    ("Visakhapatnam", "Andhra Pradesh", 2, 17.69, 83.22),
    ("Pimpri-Chinchwad", "Maharashtra", 2, 18.63, 73.80),
    ("Patna", "Bihar", 2, 25.59, 85.14),
    ("Vadodara", "Gujarat", 2, 22.31, 73.18),
    ("Ghaziabad", "Uttar Pradesh", 2, 28.67, 77.42),
    ("Ludhiana", "Punjab", 2, 30.90, 75.86),
    ("Agra", "Uttar Pradesh", 2, 27.18, 78.01),
    ("Nashik", "Maharashtra", 2, 20.00, 73.79),
    ("Faridabad", "Haryana", 2, 28.41, 77.31),
    ("Meerut", "Uttar Pradesh", 2, 28.98, 77.71),
    ("Rajkot", "Gujarat", 2, 22.30, 70.80),
    ("Kalyan-Dombivli", "Maharashtra", 2, 19.24, 73.13),
    ("Vasai-Virar", "Maharashtra", 2, 19.39, 72.84),
    ("Varanasi", "Uttar Pradesh", 2, 25.32, 82.97),
    ("Srinagar", "Jammu and Kashmir", 2, 34.08, 74.80),
    ("Aurangabad", "Maharashtra", 2, 19.88, 75.34),
    ("Dhanbad", "Jharkhand", 2, 23.80, 86.43),
    ("Amritsar", "Punjab", 2, 31.63, 74.87),
    ("Navi Mumbai", "Maharashtra", 2, 19.03, 73.02),
    ("Allahabad", "Uttar Pradesh", 2, 25.44, 81.85),
    ("Ranchi", "Jharkhand", 2, 23.34, 85.31),
    ("Howrah", "West Bengal", 2, 22.59, 88.26),
    ("Coimbatore", "Tamil Nadu", 2, 11.02, 76.96),
    ("Jabalpur", "Madhya Pradesh", 2, 23.18, 79.99),
    ("Gwalior", "Madhya Pradesh", 2, 26.22, 78.18),
    ("Vijayawada", "Andhra Pradesh", 2, 16.51, 80.65),
    ("Jodhpur", "Rajasthan", 2, 26.24, 73.02),
    ("Madurai", "Tamil Nadu", 2, 9.93, 78.12),
    ("Raipur", "Chhattisgarh", 2, 21.25, 81.63),
    ("Kota", "Rajasthan", 2, 25.21, 75.86),
    ("Chandigarh", "Chandigarh", 2, 30.73, 76.78),
    ("Guwahati", "Assam", 2, 26.14, 91.74),
    ("Thiruvananthapuram", "Kerala", 2, 8.52, 76.94),
    ("Mysore", "Karnataka", 2, 12.30, 76.64),
];

/// The fixed roster of cities covered by the collector.
pub fn all_cities() -> Vec<City> {
    CITY_ROSTER
        .iter()
        .map(|&(name, state, tier, lat, lon)| City::new(name, state, tier, lat, lon))
        .collect()
}
