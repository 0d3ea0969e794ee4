//! Fixed sample content the site starts with.

use crate::blog::BlogPost;
use crate::catalog::{CatalogCourse, CourseLevel, Rating};

/// Seed ratings are literals inside `0.0..=5.0`.
fn rating(value: f64) -> Rating {
    Rating::new(value).unwrap_or_default()
}

/// The four courses on the landing page before anyone adds one.
pub fn seed_courses() -> Vec<CatalogCourse> {
    vec![
        CatalogCourse {
            id: "1".into(),
            title: "Introduction to Artificial Intelligence".into(),
            description: "Learn the fundamentals of AI, including machine learning basics, neural networks, and practical applications in today's world.".into(),
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995".into(),
            price: "$49".into(),
            level: CourseLevel::Beginner,
            duration: "6 weeks".into(),
            instructor: "Dr. Sarah Chen".into(),
            enrolled_students: 1234,
            rating: rating(4.8),
        },
        CatalogCourse {
            id: "2".into(),
            title: "Machine Learning Fundamentals".into(),
            description: "Master the core concepts of machine learning, including supervised and unsupervised learning, model evaluation, and deployment.".into(),
            image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485".into(),
            price: "$69".into(),
            level: CourseLevel::Intermediate,
            duration: "8 weeks".into(),
            instructor: "Prof. Michael Johnson".into(),
            enrolled_students: 892,
            rating: rating(4.7),
        },
        CatalogCourse {
            id: "3".into(),
            title: "Deep Learning Advanced".into(),
            description: "Dive deep into neural networks, convolutional networks, and transformers. Build real-world AI applications.".into(),
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995".into(),
            price: "$89".into(),
            level: CourseLevel::Advanced,
            duration: "10 weeks".into(),
            instructor: "Dr. Emily Rodriguez".into(),
            enrolled_students: 645,
            rating: rating(4.9),
        },
        CatalogCourse {
            id: "4".into(),
            title: "Natural Language Processing".into(),
            description: "Learn to process and analyze text data, build chatbots, and implement language models using modern NLP techniques.".into(),
            image: "https://images.unsplash.com/photo-1655720828018-edd2daec9349".into(),
            price: "$79".into(),
            level: CourseLevel::Intermediate,
            duration: "8 weeks".into(),
            instructor: "Prof. David Lee".into(),
            enrolled_students: 756,
            rating: rating(4.6),
        },
    ]
}

/// The blog listing, in publication order (newest first).
pub fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "The Future of AI in Education".into(),
            excerpt: "Explore how artificial intelligence is transforming the educational landscape and creating new opportunities for learners worldwide.".into(),
            author: "Dr. Sarah Chen".into(),
            date: "March 1, 2024".into(),
            read_time: "5 min read".into(),
            image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485".into(),
        },
        BlogPost {
            title: "Getting Started with Machine Learning".into(),
            excerpt: "A comprehensive guide for beginners looking to start their journey in machine learning and artificial intelligence.".into(),
            author: "Prof. Michael Johnson".into(),
            date: "February 28, 2024".into(),
            read_time: "8 min read".into(),
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995".into(),
        },
        BlogPost {
            title: "Ethics in AI Development".into(),
            excerpt: "Understanding the importance of ethical considerations in artificial intelligence development and implementation.".into(),
            author: "Dr. Emily Rodriguez".into(),
            date: "February 25, 2024".into(),
            read_time: "6 min read".into(),
            image: "https://images.unsplash.com/photo-1655720828018-edd2daec9349".into(),
        },
    ]
}
