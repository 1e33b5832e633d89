// tests/support/builders.rs
use chrono::{DateTime, Utc};

use newsroom_core::domain::article::{Article, ArticleId};
use newsroom_core::domain::comment::{Comment, CommentId};
use newsroom_core::domain::topic::Topic;
use newsroom_core::domain::user::{User, Username};

pub const IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

pub fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("invalid RFC3339 in test fixture")
        .with_timezone(&Utc)
}

pub fn username(raw: &str) -> Username {
    Username::new(raw).expect("fixture username")
}

pub fn topic(slug: &str, description: &str) -> Topic {
    Topic::new(slug, description).expect("fixture topic")
}

pub fn user(name: &str, display: &str) -> User {
    User {
        username: username(name),
        name: display.to_string(),
        avatar_url: format!("https://avatars.example.com/{name}.png"),
    }
}

pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    pub fn new(id: i32, title: &str) -> Self {
        Self {
            article: Article {
                id: ArticleId(id),
                title: title.to_string(),
                topic: newsroom_core::domain::topic::TopicSlug::new("mitch"),
                author: username("butter_bridge"),
                body: format!("Body of {title}"),
                created_at: at("2020-01-01T00:00:00Z"),
                votes: 0,
                article_img_url: IMG_URL.to_string(),
            },
        }
    }

    pub fn topic(mut self, slug: &str) -> Self {
        self.article.topic = newsroom_core::domain::topic::TopicSlug::new(slug);
        self
    }

    pub fn author(mut self, name: &str) -> Self {
        self.article.author = username(name);
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.article.body = body.to_string();
        self
    }

    pub fn created_at(mut self, raw: &str) -> Self {
        self.article.created_at = at(raw);
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.article.votes = votes;
        self
    }

    pub fn build(self) -> Article {
        self.article
    }
}

pub fn comment(id: i32, article_id: i32, author: &str, votes: i32, created_at: &str) -> Comment {
    Comment {
        id: CommentId(id),
        article_id: ArticleId(article_id),
        author: username(author),
        body: format!("comment {id} on article {article_id}"),
        votes,
        created_at: at(created_at),
    }
}

pub fn seed_topics() -> Vec<Topic> {
    vec![
        topic("mitch", "The man, the Mitch, the legend"),
        topic("cats", "Not dogs"),
        topic("paper", "what books are made of"),
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        user("butter_bridge", "jonny"),
        user("icellusedkars", "sam"),
        user("rogersop", "paul"),
        user("lurker", "do_nothing"),
    ]
}

pub fn seed_articles() -> Vec<Article> {
    vec![
        ArticleBuilder::new(1, "Living in the shadow of a great man")
            .body("I find this existence challenging")
            .created_at("2020-07-09T20:11:00Z")
            .votes(100)
            .build(),
        ArticleBuilder::new(2, "Sony Vaio; or, The Laptop")
            .author("icellusedkars")
            .created_at("2020-10-16T05:03:00Z")
            .build(),
        ArticleBuilder::new(3, "Eight pug gifs that remind me of mitch")
            .author("icellusedkars")
            .created_at("2020-11-03T09:12:00Z")
            .votes(5)
            .build(),
        ArticleBuilder::new(5, "UNCOVERED: catspiracy to bring down democracy")
            .topic("cats")
            .author("rogersop")
            .created_at("2020-08-03T13:14:00Z")
            .votes(-3)
            .build(),
        ArticleBuilder::new(7, "Z")
            .author("icellusedkars")
            .body("I was hungry.")
            .created_at("2020-01-07T14:08:00Z")
            .build(),
    ]
}

pub fn seed_comments() -> Vec<Comment> {
    vec![
        comment(1, 1, "butter_bridge", 16, "2020-04-06T12:17:00Z"),
        comment(2, 1, "butter_bridge", 14, "2020-10-31T03:03:00Z"),
        comment(3, 3, "icellusedkars", 100, "2020-03-01T01:13:00Z"),
        comment(4, 1, "icellusedkars", -100, "2020-02-23T12:01:00Z"),
        comment(5, 1, "icellusedkars", 0, "2020-11-03T21:00:00Z"),
        comment(6, 5, "rogersop", 0, "2020-09-14T10:00:00Z"),
    ]
}
