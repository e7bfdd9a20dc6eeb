//! Fixtures shared by the unit test modules.

use shared::domain::{Address, Company, Geo, User, UserId};

pub fn john_doe() -> User {
    User {
        id: UserId(1),
        name: "John Doe".to_string(),
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        address: Address {
            street: "123 Main St".to_string(),
            suite: "Apt 1".to_string(),
            city: "New York".to_string(),
            zipcode: "10001".to_string(),
            geo: Geo {
                lat: "40.7128".to_string(),
                lng: "-74.0060".to_string(),
            },
        },
        phone: "555-1234".to_string(),
        website: "johndoe.com".to_string(),
        company: Company {
            name: "Tech Corp".to_string(),
            catch_phrase: "Innovation at its best".to_string(),
            bs: "synergize scalable supply-chains".to_string(),
        },
    }
}

pub fn jane_smith() -> User {
    User {
        id: UserId(2),
        name: "Jane Smith".to_string(),
        username: "janesmith".to_string(),
        email: "jane@example.com".to_string(),
        address: Address {
            street: "456 Oak Ave".to_string(),
            suite: "Suite 2".to_string(),
            city: "Los Angeles".to_string(),
            zipcode: "90210".to_string(),
            geo: Geo {
                lat: "34.0522".to_string(),
                lng: "-118.2437".to_string(),
            },
        },
        phone: "555-5678".to_string(),
        website: "janesmith.com".to_string(),
        company: Company {
            name: "Design Studio".to_string(),
            catch_phrase: "Creative solutions".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub fn sample_users() -> Vec<User> {
    vec![john_doe(), jane_smith()]
}
