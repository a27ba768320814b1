//! Text rendering for result cards and the single-movie detail view.

use marquee_app::SearchState;
use marquee_search::Movie;

/// Prints the committed result set as numbered cards.
pub fn cards(state: &SearchState) {
    if state.movies.is_empty() {
        println!("No results.");
        return;
    }

    for (index, movie) in state.movies.iter().enumerate() {
        println!("{}. {}", index + 1, card_line(movie));
    }
}

/// Prints the full record of one result, selected by its card number.
pub fn detail(state: &SearchState, selector: &str) {
    let Some(movie) = selector
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| state.movies.get(i))
    else {
        println!("No such result: {selector}");
        return;
    };

    println!("{}", movie.title);
    println!("  id:     {}", movie.imdb_id);
    if let Some(year) = movie.year {
        println!("  year:   {year}");
    }
    if let Some(actors) = &movie.actors {
        println!("  cast:   {actors}");
    }
    if let Some(poster) = &movie.poster_url {
        println!("  poster: {poster}");
    }
    for (key, value) in &movie.extra {
        println!("  {key}: {value}");
    }
}

fn card_line(movie: &Movie) -> String {
    let mut line = movie.title.clone();
    if let Some(year) = movie.year {
        line.push_str(&format!(" ({year})"));
    }
    if let Some(actors) = &movie.actors {
        line.push_str(&format!(" - {actors}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_line_formats_title_year_and_cast() {
        let movie = Movie {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: Some(2010),
            actors: Some("Leonardo DiCaprio".to_string()),
            poster_url: None,
            extra: serde_json::Map::new(),
        };
        assert_eq!(card_line(&movie), "Inception (2010) - Leonardo DiCaprio");
    }

    #[test]
    fn test_card_line_omits_missing_fields() {
        let movie = Movie {
            imdb_id: "tt0000001".to_string(),
            title: "Untitled".to_string(),
            year: None,
            actors: None,
            poster_url: None,
            extra: serde_json::Map::new(),
        };
        assert_eq!(card_line(&movie), "Untitled");
    }
}
