/// Cities warmed into the cache at startup.
///
/// Repeats are intentional leftovers of the curated list; they collapse onto
/// the same normalized key.
pub const POPULAR_CITIES: &[&str] = &[
    "London",
    "Paris",
    "New York",
    "Tokyo",
    "Sydney",
    "Berlin",
    "Rome",
    "Milan",
    "Barcelona",
    "Valencia",
    "Torino",
    "Genoa",
    "Bologna",
    "Florence",
    "Naples",
    "Palermo",
    "Catania",
    "Bari",
    "Genoa",
    "Aosta",
    "Bologna",
    "Florence",
    "Naples",
    "Palermo",
    "Catania",
    "Bari",
    "Bologna",
    "Florence",
    "Naples",
    "Palermo",
    "Catania",
    "Bari",
    "Madrid",
    "Amsterdam",
    "Toronto",
    "Singapore",
    "Dubai",
    "Hong Kong",
    "Barcelona",
    "San Francisco",
    "Mumbai",
    "Cairo",
    "Rio de Janeiro",
    "Moscow",
    "Seoul",
    "Bangkok",
    "Istanbul",
    "Vienna",
    "Prague",
    "Budapest",
];
