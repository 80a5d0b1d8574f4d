//! The static in-memory catalog.
//!
//! Carries the fixed title/app/game/subscription tables and builds the
//! home-view shelves on construction. The personalized shelves are sampled
//! with an injected RNG so a seeded run produces the same home screen.

use lounge_core::catalog::{
    AppTile, CatalogSource, GameTile, HeroSlide, Platform, Shelf, Subscription, Title,
};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// How many titles a shelf shows at most.
const SHELF_SIZE: usize = 15;

/// `CatalogSource` implementation over the fixed tables.
pub struct StaticCatalog {
    titles: Vec<Title>,
    apps: Vec<AppTile>,
    games: Vec<GameTile>,
    hero_slides: Vec<HeroSlide>,
    subscriptions: Vec<Subscription>,
    shelves: Vec<Shelf>,
}

impl StaticCatalog {
    /// Builds the catalog with entropy-seeded shelf sampling.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Builds the catalog with deterministic shelf sampling.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Builds the catalog, sampling the personalized shelves with `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let titles = all_titles();
        let shelves = build_shelves(&titles, rng);
        Self {
            titles,
            apps: all_apps(),
            games: all_games(),
            hero_slides: all_hero_slides(),
            subscriptions: all_subscriptions(),
            shelves,
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for StaticCatalog {
    fn titles(&self) -> &[Title] {
        &self.titles
    }

    fn apps(&self) -> &[AppTile] {
        &self.apps
    }

    fn games(&self) -> &[GameTile] {
        &self.games
    }

    fn hero_slides(&self) -> &[HeroSlide] {
        &self.hero_slides
    }

    fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }
}

fn build_shelves<R: Rng + ?Sized>(titles: &[Title], rng: &mut R) -> Vec<Shelf> {
    let sampled = |rng: &mut R| -> Vec<String> {
        let mut ids: Vec<String> = titles.iter().map(|t| t.id.clone()).collect();
        ids.shuffle(rng);
        ids.truncate(SHELF_SIZE);
        ids
    };
    let by_year = |years: &[u16]| -> Vec<String> {
        titles
            .iter()
            .filter(|t| years.contains(&t.year))
            .take(SHELF_SIZE)
            .map(|t| t.id.clone())
            .collect()
    };
    let by_genre = |genre: &str| -> Vec<String> {
        titles
            .iter()
            .filter(|t| t.genres.iter().any(|g| g == genre))
            .take(SHELF_SIZE)
            .map(|t| t.id.clone())
            .collect()
    };
    let by_platform = |platform: Platform| -> Vec<String> {
        titles
            .iter()
            .filter(|t| t.platform == platform)
            .take(SHELF_SIZE)
            .map(|t| t.id.clone())
            .collect()
    };

    let shelf = |name: &str, title_ids: Vec<String>| Shelf {
        name: name.to_string(),
        title_ids,
    };

    vec![
        shelf("Personal Picks for You", sampled(rng)),
        shelf("Based on Your Watch History", sampled(rng)),
        shelf("Friends Are Watching", sampled(rng)),
        shelf("Currently Trending", by_year(&[2024, 2023, 2022])),
        shelf("Popular Around You", sampled(rng)),
        shelf("Action-Packed Adventures", by_genre("Action")),
        shelf("Laugh Out Loud (Comedy)", by_genre("Comedy")),
        shelf("Emotional Dramas", by_genre("Drama")),
        shelf("Gripping Crime Thrillers", by_genre("Crime")),
        shelf("Fantasy Escapes", by_genre("Fantasy")),
        shelf("Sci-Fi Journeys", by_genre("Sci-Fi")),
        shelf("Netflix Originals", by_platform(Platform::Netflix)),
        shelf("Prime Video Highlights", by_platform(Platform::PrimeVideo)),
        shelf("Hotstar Specials", by_platform(Platform::Hotstar)),
        shelf("Aha Originals", by_platform(Platform::Aha)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn title(
    id: &str,
    name: &str,
    description: &str,
    genres: &[&str],
    duration: &str,
    rating: &str,
    year: u16,
    image: &str,
    platform: Platform,
    featured: bool,
) -> Title {
    Title {
        id: id.to_string(),
        title: name.to_string(),
        description: description.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        duration: duration.to_string(),
        rating: rating.to_string(),
        year,
        image: image.to_string(),
        platform,
        featured,
    }
}

fn all_titles() -> Vec<Title> {
    use Platform::*;
    vec![
        title(
            "1",
            "Avatar: The Way of Water",
            "Jake Sully and Neytiri have formed a family and are doing everything to stay together. However, they must leave their home and explore the regions of Pandora.",
            &["Sci-Fi", "Action", "Adventure"],
            "3h 12m",
            "7.6",
            2022,
            "image1",
            Hotstar,
            true,
        ),
        title(
            "2",
            "Stranger Things 4",
            "It's been six months since the Battle of Starcourt, which brought terror and destruction to Hawkins. Struggling with the aftermath, our group of friends are separated for the first time.",
            &["Drama", "Horror", "Sci-Fi"],
            "1h 20m",
            "8.7",
            2022,
            "image2",
            Netflix,
            false,
        ),
        title(
            "3",
            "The Lord of the Rings: The Rings of Power",
            "Epic drama set thousands of years before the events of J.R.R. Tolkien's The Hobbit and The Lord of the Rings follows an ensemble cast of characters.",
            &["Fantasy", "Adventure", "Drama"],
            "1h 10m",
            "6.9",
            2022,
            "image3",
            PrimeVideo,
            false,
        ),
        title(
            "4",
            "RRR",
            "A fictitious story about two legendary revolutionaries and their journey away from home before they started fighting for their country in 1920s.",
            &["Action", "Drama"],
            "3h 7m",
            "7.9",
            2022,
            "image4",
            Aha,
            false,
        ),
        title(
            "5",
            "House of the Dragon",
            "The story of the Targaryen civil war that took place about 300 years before events portrayed in Game of Thrones.",
            &["Drama", "Fantasy", "Action"],
            "1h 6m",
            "8.5",
            2022,
            "image5",
            Hotstar,
            false,
        ),
        title(
            "6",
            "Wednesday",
            "Smart, sarcastic and a little dead inside, Wednesday Addams investigates a murder spree while making new friends — and foes — at Nevermore Academy.",
            &["Comedy", "Crime", "Family"],
            "50m",
            "8.1",
            2022,
            "image6",
            Netflix,
            false,
        ),
        title(
            "7",
            "Top Gun: Maverick",
            "After thirty years, Maverick is still pushing the envelope as a top naval aviator, but must confront ghosts of his past when he leads TOP GUN's elite graduates on a mission.",
            &["Action", "Drama"],
            "2h 10m",
            "8.3",
            2022,
            "image7",
            PrimeVideo,
            false,
        ),
        title(
            "8",
            "The Boys",
            "A group of vigilantes set out to take down corrupt superheroes who abuse their superpowers.",
            &["Action", "Comedy", "Crime"],
            "1h",
            "8.7",
            2022,
            "image8",
            PrimeVideo,
            false,
        ),
        title(
            "9",
            "Euphoria",
            "A look at life for a group of high school students as they grapple with issues of drugs, sex, and violence.",
            &["Drama"],
            "1h",
            "8.4",
            2022,
            "image9",
            Hotstar,
            false,
        ),
        title(
            "10",
            "Money Heist",
            "An unusual group of robbers attempt to carry out the most perfect robbery in Spanish history - stealing 2.4 billion euros from the Royal Mint of Spain.",
            &["Action", "Crime", "Mystery"],
            "1h 10m",
            "8.2",
            2021,
            "image10",
            Netflix,
            false,
        ),
        title(
            "11",
            "Pushpa: The Rise",
            "A laborer named Pushpa makes enemies as he rises in the world of red sandalwood smuggling. However, violence erupts when the police attempt to bring down his illegal business.",
            &["Action", "Crime", "Drama"],
            "2h 59m",
            "7.6",
            2021,
            "image11",
            Aha,
            false,
        ),
        title(
            "12",
            "Dune",
            "Feature adaptation of Frank Herbert's science fiction novel about the son of a noble family entrusted with the protection of the most valuable asset.",
            &["Action", "Adventure", "Drama"],
            "2h 35m",
            "8.0",
            2021,
            "image12",
            PrimeVideo,
            false,
        ),
        title(
            "13",
            "Squid Game",
            "Hundreds of cash-strapped players accept a strange invitation to compete in children's games for a tempting prize, but the stakes are deadly.",
            &["Action", "Drama", "Mystery"],
            "1h",
            "8.0",
            2021,
            "image13",
            Netflix,
            false,
        ),
        title(
            "14",
            "Loki",
            "The mercurial villain Loki resumes his role as the God of Mischief following the events of Avengers: Endgame.",
            &["Action", "Adventure", "Fantasy"],
            "50m",
            "8.2",
            2021,
            "image14",
            Hotstar,
            false,
        ),
        title(
            "15",
            "Arya 2",
            "Arya, an unconventional young man, falls in love with Geetha at first sight. He tries to impress her in various ways but fails.",
            &["Comedy", "Drama", "Romance"],
            "2h 35m",
            "7.8",
            2009,
            "image15",
            Aha,
            false,
        ),
        title(
            "16",
            "Black Panther: Wakanda Forever",
            "The people of Wakanda fight to protect their home from intervening world powers as they mourn the death of King T'Challa.",
            &["Action", "Adventure", "Drama"],
            "2h 41m",
            "6.7",
            2022,
            "image16",
            Hotstar,
            false,
        ),
        title(
            "17",
            "The Batman",
            "When a sadistic serial killer begins murdering key political figures in Gotham, Batman is forced to investigate the city's hidden corruption.",
            &["Action", "Crime", "Drama"],
            "2h 56m",
            "7.8",
            2022,
            "image17",
            PrimeVideo,
            false,
        ),
        title(
            "18",
            "Ozark",
            "A financial advisor drags his family from Chicago to the Missouri Ozarks, where he launders money to appease a drug boss.",
            &["Crime", "Drama", "Thriller"],
            "1h",
            "8.4",
            2022,
            "image18",
            Netflix,
            false,
        ),
        title(
            "19",
            "The Witcher",
            "Geralt of Rivia, a solitary monster hunter, struggles to find his place in a world where people often prove more wicked than beasts.",
            &["Action", "Adventure", "Drama"],
            "1h",
            "8.2",
            2021,
            "image19",
            Netflix,
            false,
        ),
        title(
            "20",
            "Spider-Man: No Way Home",
            "With Spider-Man's identity now revealed, Peter asks Doctor Strange for help. When a spell goes wrong, dangerous foes from other worlds start to appear.",
            &["Action", "Adventure", "Fantasy"],
            "2h 28m",
            "8.2",
            2021,
            "image20",
            PrimeVideo,
            false,
        ),
        title(
            "21",
            "Encanto",
            "A Colombian teenage girl has to face the frustration of being the only member of her family without magical powers.",
            &["Animation", "Comedy", "Family"],
            "1h 42m",
            "7.2",
            2021,
            "image21",
            Hotstar,
            false,
        ),
        title(
            "22",
            "The Mandalorian",
            "The travels of a lone bounty hunter in the outer reaches of the galaxy, far from the authority of the New Republic.",
            &["Action", "Adventure", "Fantasy"],
            "40m",
            "8.7",
            2020,
            "image22",
            Hotstar,
            false,
        ),
        title(
            "23",
            "Eternals",
            "The saga of the Eternals, a race of immortal beings who lived on Earth and shaped its history and civilizations.",
            &["Action", "Adventure", "Drama"],
            "2h 36m",
            "6.3",
            2021,
            "image23",
            Hotstar,
            false,
        ),
        title(
            "24",
            "Fast & Furious 9",
            "Dom and the crew must take on an international terrorist who turns out to be Dom and Mia's estranged brother.",
            &["Action", "Crime", "Thriller"],
            "2h 23m",
            "5.2",
            2021,
            "image24",
            PrimeVideo,
            false,
        ),
        title(
            "25",
            "Cruella",
            "A live-action prequel feature film following a young Cruella de Vil.",
            &["Comedy", "Crime", "Drama"],
            "2h 14m",
            "7.3",
            2021,
            "image25",
            Hotstar,
            false,
        ),
        title(
            "26",
            "Wonder Woman 1984",
            "Diana must contend with a work colleague and businessman, whose desire for extreme wealth sends the world down a path of destruction.",
            &["Action", "Adventure", "Fantasy"],
            "2h 31m",
            "5.4",
            2020,
            "image26",
            PrimeVideo,
            false,
        ),
        title(
            "27",
            "Black Widow",
            "Natasha Romanoff confronts the darker parts of her ledger when a dangerous conspiracy with ties to her past arises.",
            &["Action", "Adventure", "Sci-Fi"],
            "2h 14m",
            "6.7",
            2021,
            "image27",
            Hotstar,
            false,
        ),
        title(
            "28",
            "Shang-Chi and the Legend of the Ten Rings",
            "Shang-Chi must confront the past he thought he left behind when he is drawn into the web of the mysterious Ten Rings organization.",
            &["Action", "Adventure", "Fantasy"],
            "2h 12m",
            "7.4",
            2021,
            "image28",
            Hotstar,
            false,
        ),
        title(
            "29",
            "Free Guy",
            "A bank teller discovers that he's actually an NPC inside a brutal, open world video game.",
            &["Action", "Adventure", "Comedy"],
            "1h 55m",
            "7.1",
            2021,
            "image29",
            PrimeVideo,
            false,
        ),
        title(
            "30",
            "The Suicide Squad",
            "Supervillains Harley Quinn, Bloodsport, Peacemaker and a collection of nutty cons at Belle Reve prison join the super-secret, super-shady Task Force X.",
            &["Action", "Adventure", "Comedy"],
            "2h 12m",
            "7.2",
            2021,
            "image30",
            PrimeVideo,
            false,
        ),
        title(
            "31",
            "Jungle Cruise",
            "Based on Disneyland's theme park ride where a small riverboat takes a group of travelers through a jungle filled with dangerous animals and reptiles.",
            &["Action", "Adventure", "Comedy"],
            "2h 7m",
            "6.6",
            2021,
            "image31",
            Hotstar,
            false,
        ),
        title(
            "32",
            "No Time to Die",
            "James Bond has left active service. His peace is short-lived when Felix Leiter, an old friend from the CIA, turns up asking for help.",
            &["Action", "Adventure", "Thriller"],
            "2h 43m",
            "7.3",
            2021,
            "image32",
            PrimeVideo,
            false,
        ),
        title(
            "33",
            "Venom: Let There Be Carnage",
            "Eddie Brock attempts to reignite his career by interviewing serial killer Cletus Kasady, who becomes the host of the symbiote Carnage.",
            &["Action", "Adventure", "Sci-Fi"],
            "1h 37m",
            "5.9",
            2021,
            "image33",
            Netflix,
            false,
        ),
        title(
            "34",
            "The Matrix Resurrections",
            "Return to the world of two realities: one, everyday life; the other, what lies behind it.",
            &["Action", "Sci-Fi"],
            "2h 28m",
            "5.7",
            2021,
            "image34",
            PrimeVideo,
            false,
        ),
        title(
            "35",
            "Dune: Part Two",
            "Paul Atreides unites with Chani and the Fremen while seeking revenge against the conspirators who destroyed his family.",
            &["Action", "Adventure", "Drama"],
            "2h 46m",
            "8.5",
            2024,
            "image35",
            PrimeVideo,
            false,
        ),
        title(
            "36",
            "Oppenheimer",
            "The story of American scientist J. Robert Oppenheimer and his role in the development of the atomic bomb.",
            &["Biography", "Drama", "History"],
            "3h",
            "8.3",
            2023,
            "image36",
            Netflix,
            false,
        ),
        title(
            "37",
            "Barbie",
            "Barbie and Ken are having the time of their lives in the colorful and seemingly perfect world of Barbie Land.",
            &["Adventure", "Comedy", "Fantasy"],
            "1h 54m",
            "6.9",
            2023,
            "image37",
            PrimeVideo,
            false,
        ),
        title(
            "38",
            "John Wick: Chapter 4",
            "John Wick uncovers a path to defeating The High Table. But before he can earn his freedom, Wick must face off against a new enemy.",
            &["Action", "Crime", "Thriller"],
            "2h 49m",
            "7.7",
            2023,
            "image38",
            PrimeVideo,
            false,
        ),
        title(
            "39",
            "Guardians of the Galaxy Vol. 3",
            "Still reeling from the loss of Gamora, Peter Quill rallies his team to defend the universe and protect one of their own.",
            &["Action", "Adventure", "Comedy"],
            "2h 30m",
            "7.9",
            2023,
            "image39",
            Hotstar,
            false,
        ),
        title(
            "40",
            "The Flash",
            "Barry Allen uses his super speed to change the past, but his attempt to save his family creates a world without super heroes.",
            &["Action", "Adventure", "Fantasy"],
            "2h 24m",
            "6.7",
            2023,
            "image40",
            PrimeVideo,
            false,
        ),
        title(
            "41",
            "Indiana Jones and the Dial of Destiny",
            "Archaeologist Indiana Jones races against time to retrieve a legendary artifact that can change the course of history.",
            &["Action", "Adventure"],
            "2h 34m",
            "6.5",
            2023,
            "image41",
            Hotstar,
            false,
        ),
        title(
            "42",
            "Transformers: Rise of the Beasts",
            "During the '90s, a new faction of Transformers - the Maximals - join the Autobots as allies in the battle for Earth.",
            &["Action", "Adventure", "Sci-Fi"],
            "2h 7m",
            "6.0",
            2023,
            "image42",
            PrimeVideo,
            false,
        ),
        title(
            "43",
            "Scream VI",
            "The survivors of the Ghostface killings leave Woodsboro behind and start a fresh chapter in New York City.",
            &["Horror", "Mystery", "Thriller"],
            "2h 3m",
            "6.5",
            2023,
            "image43",
            Netflix,
            false,
        ),
        title(
            "44",
            "Ant-Man and the Wasp: Quantumania",
            "Scott Lang and Hope Van Dyne are dragged into the Quantum Realm, along with Hope's parents and Scott's daughter Cassie.",
            &["Action", "Adventure", "Comedy"],
            "2h 5m",
            "6.1",
            2023,
            "image44",
            Hotstar,
            false,
        ),
        title(
            "45",
            "Avatar: The Last Airbender",
            "A young boy known as the Avatar must master the four elemental powers to save the world, and fight against an evil Fire Nation.",
            &["Action", "Adventure", "Family"],
            "1h",
            "8.7",
            2024,
            "image45",
            Netflix,
            false,
        ),
    ]
}

fn app(id: &str, name: &str, color: &str, image: &str, platform: Option<&str>) -> AppTile {
    AppTile {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        image: image.to_string(),
        platform: platform.map(str::to_string),
    }
}

fn all_apps() -> Vec<AppTile> {
    vec![
        app("prime", "Prime Video", "blue", "prime-video", Some("Prime Video")),
        app("hotstar", "Hotstar", "purple", "hotstar", Some("Hotstar")),
        app("aha", "Aha", "orange", "aha", Some("Aha")),
        app("netflix", "Netflix", "red", "netflix", Some("Netflix")),
        app("youtube", "YouTube", "red", "youtube", None),
        app("spotify", "Spotify", "green", "spotify", None),
        app("zee5", "Zee5", "purple", "zee5", Some("Zee5")),
        app("sonyliv", "SonyLIV", "blue", "sonyliv", Some("SonyLIV")),
        app("voot", "Voot", "orange", "voot", Some("Voot")),
        app("appletv", "Apple TV", "gray", "appletv", Some("Apple TV")),
        app("mxplayer", "MX Player", "blue", "mxplayer", Some("MX Player")),
        app("jiocinema", "JioCinema", "purple", "jiocinema", Some("JioCinema")),
        app("erosnow", "Eros Now", "red", "erosnow", Some("Eros Now")),
        app("altbalaji", "ALTBalaji", "yellow", "altbalaji", Some("ALTBalaji")),
        app("discovery", "Discovery+", "blue", "discovery", Some("Discovery+")),
    ]
}

fn game(id: &str, name: &str, icon: &str, color: &str, category: &str, image: &str) -> GameTile {
    GameTile {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        category: category.to_string(),
        image: image.to_string(),
    }
}

fn all_games() -> Vec<GameTile> {
    vec![
        game("clash-royale", "Clash Royale", "⚔️", "purple", "Strategy", "game6"),
        game("fortnite", "Fortnite", "🎮", "indigo", "Battle Royale", "game7"),
        game("minecraft", "Minecraft", "🧱", "green", "Sandbox", "game8"),
        game("crossy-road", "Crossy Road", "🐸", "green", "Arcade", "image01"),
        game("temple-run", "Temple Run", "🏃", "orange", "Adventure", "game2"),
        game("candy-crush", "Candy Crush", "🍭", "pink", "Puzzle", "game3"),
        game("angry-birds", "Angry Birds", "🐦", "red", "Arcade", "game4"),
        game("subway-surfers", "Subway Surfers", "🚇", "blue", "Action", "game5"),
    ]
}

fn all_hero_slides() -> Vec<HeroSlide> {
    let slide = |id: &str, title: &str, image: &str, kind: &str| HeroSlide {
        id: id.to_string(),
        title: title.to_string(),
        image: image.to_string(),
        kind: kind.to_string(),
    };
    vec![
        slide("slide1", "ICC Champions Trophy", "cricket", "sports"),
        slide("slide2", "Chhaava", "trending", "movies"),
        slide("slide3", "BIGG BOSS", "tvshows", "tv"),
        slide("slide4", "Stranger Things", "series", "series"),
    ]
}

fn plan(
    id: &str,
    name: &str,
    price: &str,
    active: bool,
    next_billing: Option<&str>,
    features: &[&str],
) -> Subscription {
    Subscription {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        active,
        next_billing: next_billing.map(str::to_string),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn all_subscriptions() -> Vec<Subscription> {
    vec![
        plan(
            "prime-premium",
            "Amazon Prime Video Premium",
            "$14.99/month",
            true,
            Some("Dec 25, 2024"),
            &["4K Ultra HD", "Download for offline", "Multiple devices", "Prime benefits"],
        ),
        plan(
            "netflix-standard",
            "Netflix Standard",
            "$15.99/month",
            true,
            Some("Jan 10, 2025"),
            &["HD streaming", "2 screens", "Download feature", "No ads"],
        ),
        plan(
            "youtube-premium",
            "YouTube Premium",
            "$11.99/month",
            true,
            Some("Dec 30, 2024"),
            &["Ad-free videos", "Background play", "YouTube Music", "Downloads"],
        ),
        plan(
            "prime-basic",
            "Amazon Prime Video Basic",
            "$8.99/month",
            false,
            None,
            &["HD streaming", "Limited ads", "Download for offline"],
        ),
        plan(
            "netflix-basic",
            "Netflix Basic",
            "$6.99/month",
            false,
            None,
            &["720p streaming", "1 screen", "Limited downloads"],
        ),
        plan(
            "netflix-premium",
            "Netflix Premium",
            "$22.99/month",
            false,
            None,
            &["4K Ultra HD", "4 screens", "Unlimited downloads", "Spatial audio"],
        ),
        plan(
            "hotstar-premium",
            "Disney+ Hotstar Premium",
            "$9.99/month",
            false,
            None,
            &["Live sports", "Disney content", "Local content", "4K streaming"],
        ),
        plan(
            "hotstar-vip",
            "Disney+ Hotstar VIP",
            "$4.99/month",
            false,
            None,
            &["Live sports", "Local content", "HD streaming"],
        ),
        plan(
            "spotify-premium",
            "Spotify Premium",
            "$9.99/month",
            false,
            None,
            &["Ad-free music", "Offline downloads", "High quality audio", "Unlimited skips"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_carries_the_full_tables() {
        let catalog = StaticCatalog::seeded(7);
        assert_eq!(catalog.titles().len(), 45);
        assert_eq!(catalog.apps().len(), 15);
        assert_eq!(catalog.games().len(), 8);
        assert_eq!(catalog.hero_slides().len(), 4);
        assert_eq!(catalog.subscriptions().len(), 9);
        assert_eq!(catalog.shelves().len(), 15);
    }

    #[test]
    fn seeded_catalogs_sample_the_same_shelves() {
        let a = StaticCatalog::seeded(42);
        let b = StaticCatalog::seeded(42);
        assert_eq!(a.shelves(), b.shelves());
    }

    #[test]
    fn shelves_never_exceed_the_row_size() {
        let catalog = StaticCatalog::seeded(7);
        for shelf in catalog.shelves() {
            assert!(shelf.title_ids.len() <= SHELF_SIZE, "{}", shelf.name);
        }
    }

    #[test]
    fn shelf_ids_resolve_to_titles() {
        let catalog = StaticCatalog::seeded(7);
        for shelf in catalog.shelves() {
            for id in &shelf.title_ids {
                assert!(catalog.title_by_id(id).is_some(), "{} in {}", id, shelf.name);
            }
        }
    }

    #[test]
    fn platform_shelves_are_homogeneous() {
        let catalog = StaticCatalog::seeded(7);
        for title in catalog.shelf_titles("Aha Originals") {
            assert_eq!(title.platform, Platform::Aha);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let catalog = StaticCatalog::seeded(7);

        let by_title = catalog.search("dune");
        assert!(by_title.iter().any(|t| t.title == "Dune"));
        assert!(by_title.iter().any(|t| t.title == "Dune: Part Two"));

        let by_genre = catalog.search("horror");
        assert!(by_genre.iter().any(|t| t.title == "Scream VI"));

        let by_description = catalog.search("pandora");
        assert!(by_description.iter().any(|t| t.id == "1"));
    }

    #[test]
    fn blank_search_yields_nothing() {
        let catalog = StaticCatalog::seeded(7);
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn featured_returns_the_promoted_title() {
        let catalog = StaticCatalog::seeded(7);
        let featured = catalog.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "1");
    }

    #[test]
    fn all_genre_filter_matches_everything() {
        let catalog = StaticCatalog::seeded(7);
        assert_eq!(catalog.titles_in_genre("All").len(), 45);
        assert!(!catalog.titles_in_genre("Sci-Fi").is_empty());
    }

    #[test]
    fn platform_label_lookup_matches_display_names() {
        let catalog = StaticCatalog::seeded(7);
        let prime = catalog.titles_on_platform("Prime Video");
        assert!(!prime.is_empty());
        assert!(prime.iter().all(|t| t.platform == Platform::PrimeVideo));
        assert!(catalog.titles_on_platform("Zee5").is_empty());
    }
}
