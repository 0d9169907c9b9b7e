use uuid::Uuid;

use super::entities::{
    Client, Contact, Hero, PortfolioConfig, Project, SocialLink, Testimonial,
};

// Seed element ids are fixed constants so two calls to `seed()` produce
// structurally equal documents. Fresh v4 ids are only minted for elements
// created during an editing session or loaded without one.
fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// The complete default portfolio document.
///
/// Every top-level section exists here; the config store relies on that to
/// fill gaps in partial or stale persisted documents. Skills and software
/// start empty — they are authored entirely by the user.
pub fn seed() -> PortfolioConfig {
    PortfolioConfig {
        hero: Hero {
            name: "Asad Synt".to_string(),
            title: "I create webpages that transform your visitors into clients!"
                .to_string(),
            description: "I am a fervent web design enthusiast. My commitment lies in \
                          creating aesthetically stunning and operationally vigorous websites."
                .to_string(),
            image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80"
                .to_string(),
        },
        skills: Vec::new(),
        software: Vec::new(),
        projects: vec![
            Project {
                id: seed_id(0x1001),
                title: "Brand Identity - TechVision".to_string(),
                description: "Complete brand identity design including logo, color palette, \
                              and brand guidelines"
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1634942537034-2531766767d1?auto=format&fit=crop&q=80"
                    .to_string(),
                category: "Branding".to_string(),
                link: "#".to_string(),
                full_description: Some(
                    "Created a comprehensive brand identity for TechVision, a leading tech \
                     startup. The project included logo design, color palette selection, \
                     typography guidelines, and brand usage documentation."
                        .to_string(),
                ),
                additional_images: vec![
                    "https://images.unsplash.com/photo-1636622433525-127afdf3662d?auto=format&fit=crop&q=80"
                        .to_string(),
                    "https://images.unsplash.com/photo-1636622433209-9b8a7b0b4426?auto=format&fit=crop&q=80"
                        .to_string(),
                ],
            },
            Project {
                id: seed_id(0x1002),
                title: "Portfolio Website - Studio North".to_string(),
                description: "Responsive portfolio site with a custom content editor"
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80"
                    .to_string(),
                category: "Web Design".to_string(),
                link: "#".to_string(),
                full_description: None,
                additional_images: Vec::new(),
            },
        ],
        testimonials: vec![Testimonial {
            id: seed_id(0x2001),
            name: "Alex Thompson".to_string(),
            role: "Creative Director".to_string(),
            company: "DesignCraft Studios".to_string(),
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80"
                .to_string(),
            content: "Working with Asad was an absolute pleasure. His attention to detail \
                      and creative vision transformed our website into something truly \
                      exceptional."
                .to_string(),
            rating: 5,
        }],
        clients: vec![
            Client { id: seed_id(0x3001), name: "Adobe".to_string(), icon: "Palette".to_string() },
            Client { id: seed_id(0x3002), name: "Microsoft".to_string(), icon: "Monitor".to_string() },
            Client { id: seed_id(0x3003), name: "Google".to_string(), icon: "Globe".to_string() },
            Client { id: seed_id(0x3004), name: "Meta".to_string(), icon: "Layout".to_string() },
            Client { id: seed_id(0x3005), name: "Apple".to_string(), icon: "Smartphone".to_string() },
            Client { id: seed_id(0x3006), name: "Amazon".to_string(), icon: "Code".to_string() },
        ],
        contact: Contact {
            email: "contact@example.com".to_string(),
            socials: vec![
                SocialLink {
                    platform: "Twitter".to_string(),
                    url: "https://twitter.com".to_string(),
                },
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com".to_string(),
                },
                SocialLink {
                    platform: "Dribbble".to_string(),
                    url: "https://dribbble.com".to_string(),
                },
            ],
        },
    }
}
