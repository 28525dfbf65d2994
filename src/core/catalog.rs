use crate::core::models::movie::Movie;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    genre: &str,
    duration: &str,
    rating: &str,
    image: &str,
    description: &str,
    showtimes: &[&str],
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        duration: duration.to_string(),
        rating: rating.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        showtimes: showtimes.iter().map(|s| s.to_string()).collect(),
    }
}

pub static MOVIES: Lazy<Vec<Movie>> = Lazy::new(|| {
    vec![
        movie(
            "1",
            "The Cosmic Journey",
            "Sci-Fi",
            "2h 15m",
            "8.5/10",
            "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=800&h=1200&fit=crop",
            "An epic space adventure that takes you beyond the stars.",
            &["10:00 AM", "1:00 PM", "4:00 PM", "7:00 PM", "10:00 PM"],
        ),
        movie(
            "2",
            "Shadow in the Night",
            "Thriller",
            "1h 55m",
            "8.2/10",
            "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=800&h=1200&fit=crop",
            "A gripping thriller that will keep you on the edge of your seat.",
            &["11:00 AM", "2:00 PM", "5:00 PM", "8:00 PM", "11:00 PM"],
        ),
        movie(
            "3",
            "Laughter Therapy",
            "Comedy",
            "1h 40m",
            "7.8/10",
            "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=800&h=1200&fit=crop",
            "The funniest movie of the year that will leave you in stitches.",
            &["9:00 AM", "12:00 PM", "3:00 PM", "6:00 PM", "9:00 PM"],
        ),
        movie(
            "4",
            "Forever Yours",
            "Romance",
            "2h 05m",
            "8.0/10",
            "https://images.unsplash.com/photo-1518676590629-3dcbd9c5a5c9?w=800&h=1200&fit=crop",
            "A heartwarming love story that transcends time.",
            &["10:30 AM", "1:30 PM", "4:30 PM", "7:30 PM", "10:30 PM"],
        ),
        movie(
            "5",
            "Dragon Warriors",
            "Action",
            "2h 25m",
            "8.7/10",
            "https://images.unsplash.com/photo-1594908900066-3f47337549d8?w=800&h=1200&fit=crop",
            "Non-stop action with breathtaking martial arts sequences.",
            &["11:30 AM", "2:30 PM", "5:30 PM", "8:30 PM"],
        ),
        movie(
            "6",
            "The Haunting",
            "Horror",
            "1h 50m",
            "7.5/10",
            "https://images.unsplash.com/photo-1509347528160-9a9e33742cdb?w=800&h=1200&fit=crop",
            "A terrifying experience that will haunt your dreams.",
            &["12:00 PM", "3:00 PM", "6:00 PM", "9:00 PM", "12:00 AM"],
        ),
    ]
});

pub fn list_movies() -> &'static [Movie] {
    &MOVIES
}

pub fn find_movie(movie_id: &str) -> Option<&'static Movie> {
    MOVIES.iter().find(|m| m.id == movie_id)
}
