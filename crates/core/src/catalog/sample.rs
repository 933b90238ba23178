//! Built-in fallback catalog.

use super::CatalogItem;

const POSTER_A: &str = "https://images.unsplash.com/photo-1635805737707-575885ab0820?auto=format&fit=crop&w=1000&q=80";
const POSTER_B: &str = "https://images.unsplash.com/photo-1594909122845-11baa439b7bf?auto=format&fit=crop&w=1000&q=80";
const POSTER_C: &str = "https://images.unsplash.com/photo-1485846234645-a62644f84728?auto=format&fit=crop&w=1000&q=80";
const BACKDROP_A: &str = "https://images.unsplash.com/photo-1489599809505-f2d4c3f70800?auto=format&fit=crop&w=2000&q=80";
const BACKDROP_B: &str = "https://images.unsplash.com/photo-1534447677768-be436bb09401?auto=format&fit=crop&w=2000&q=80";
const BACKDROP_C: &str = "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?auto=format&fit=crop&w=2000&q=80";

struct Entry {
    id: u64,
    title: &'static str,
    certification: &'static str,
    duration: &'static str,
    category: &'static str,
    rating: f64,
    description: &'static str,
    images: (&'static str, &'static str),
    featured: bool,
    top10: bool,
    director: &'static str,
    cast: [&'static str; 3],
    awards: &'static [&'static str],
}

const ENTRIES: [Entry; 5] = [
    Entry {
        id: 1,
        title: "The Matrix Resurrections",
        certification: "PG-13",
        duration: "2h 28m",
        category: "action",
        rating: 8.2,
        description: "Return to a world of two realities: one, everyday life; the other, what lies behind it. To find out if his reality is a construct, to truly know himself, Mr. Anderson will have to choose to follow the white rabbit once more.",
        images: (POSTER_A, BACKDROP_A),
        featured: true,
        top10: true,
        director: "Lana Wachowski",
        cast: ["Keanu Reeves", "Carrie-Anne Moss", "Yahya Abdul-Mateen II"],
        awards: &["Best Visual Effects"],
    },
    Entry {
        id: 2,
        title: "Dune",
        certification: "PG-13",
        duration: "2h 35m",
        category: "action",
        rating: 8.1,
        description: "Feature adaptation of Frank Herbert's science fiction novel about the son of a noble family entrusted with the protection of the most valuable asset and most vital element in the galaxy.",
        images: (POSTER_B, BACKDROP_B),
        featured: true,
        top10: true,
        director: "Denis Villeneuve",
        cast: ["Timothée Chalamet", "Rebecca Ferguson", "Oscar Isaac"],
        awards: &["Best Cinematography", "Best Original Score"],
    },
    Entry {
        id: 3,
        title: "Spider-Man: No Way Home",
        certification: "PG-13",
        duration: "2h 28m",
        category: "action",
        rating: 8.7,
        description: "With Spider-Man's identity now revealed, Peter asks Doctor Strange for help. When a spell goes wrong, dangerous foes from other worlds start to appear, forcing Peter to discover what it truly means to be Spider-Man.",
        images: (POSTER_A, BACKDROP_A),
        featured: true,
        top10: true,
        director: "Jon Watts",
        cast: ["Tom Holland", "Zendaya", "Benedict Cumberbatch"],
        awards: &["Best Visual Effects"],
    },
    Entry {
        id: 4,
        title: "The Power of the Dog",
        certification: "R",
        duration: "2h 6m",
        category: "drama",
        rating: 7.8,
        description: "Charismatic rancher Phil Burbank inspires fear and awe in those around him. When his brother brings home a new wife and her son, Phil torments them until he finds himself exposed to the possibility of love.",
        images: (POSTER_C, BACKDROP_C),
        featured: false,
        top10: false,
        director: "Jane Campion",
        cast: ["Benedict Cumberbatch", "Kirsten Dunst", "Jesse Plemons"],
        awards: &["Best Director", "Best Picture"],
    },
    Entry {
        id: 5,
        title: "Don't Look Up",
        certification: "R",
        duration: "2h 18m",
        category: "comedy",
        rating: 7.2,
        description: "Two low-level astronomers must go on a giant media tour to warn mankind of an approaching comet that will destroy planet Earth.",
        images: (POSTER_B, BACKDROP_B),
        featured: false,
        top10: true,
        director: "Adam McKay",
        cast: ["Leonardo DiCaprio", "Jennifer Lawrence", "Meryl Streep"],
        awards: &["Best Original Screenplay"],
    },
];

pub(super) fn sample_items() -> Vec<CatalogItem> {
    ENTRIES
        .iter()
        .map(|e| {
            let mut item = CatalogItem::new(e.id, e.title, e.category);
            item.year = "2021".to_string();
            item.rating = e.rating;
            item.certification = Some(e.certification.to_string());
            item.duration = Some(e.duration.to_string());
            item.description = Some(e.description.to_string());
            item.front_image = Some(e.images.0.to_string());
            item.back_image = Some(e.images.1.to_string());
            item.watch_link = Some("#".to_string());
            item.featured = e.featured;
            item.is_new_release = true;
            item.is_popular = true;
            item.top10 = e.top10;
            item.director = Some(e.director.to_string());
            item.cast = e.cast.iter().map(|s| s.to_string()).collect();
            item.language = Some("English".to_string());
            item.awards = e.awards.iter().map(|s| s.to_string()).collect();
            item
        })
        .collect()
}
