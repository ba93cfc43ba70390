#[derive(Clone, PartialEq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct GalleryProject {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Residential Design",
        description: "Transform your home into a personalized sanctuary with our comprehensive residential interior design services.",
        icon: "🏠",
    },
    Service {
        id: 2,
        title: "Space Planning",
        description: "Optimize your space with functional layouts that enhance flow and maximize every square foot.",
        icon: "📐",
    },
    Service {
        id: 3,
        title: "Color Consultation",
        description: "Expert color selection to create harmonious palettes that reflect your style and personality.",
        icon: "🎨",
    },
    Service {
        id: 4,
        title: "Furniture Selection",
        description: "Curate the perfect pieces that blend comfort, style, and functionality for your space.",
        icon: "🛋️",
    },
    Service {
        id: 5,
        title: "Lighting Design",
        description: "Create ambiance and highlight architectural features with strategic lighting solutions.",
        icon: "💡",
    },
    Service {
        id: 6,
        title: "Styling & Decor",
        description: "Add the finishing touches with carefully selected accessories and decor elements.",
        icon: "✨",
    },
];

pub const GALLERY_CATEGORIES: &[&str] = &["All", "Bedroom", "Kitchen", "Dining Room"];

pub const GALLERY_PROJECTS: &[GalleryProject] = &[
    GalleryProject {
        id: 1,
        title: "Modern Bedroom Retreat",
        category: "Bedroom",
        image: "https://images.unsplash.com/photo-1642541070065-3912f347e7c6?w=800",
    },
    GalleryProject {
        id: 2,
        title: "Serene Sleeping Space",
        category: "Bedroom",
        image: "https://images.unsplash.com/photo-1562438668-bcf0ca6578f0?w=800",
    },
    GalleryProject {
        id: 3,
        title: "Contemporary Kitchen",
        category: "Kitchen",
        image: "https://images.unsplash.com/photo-1556912167-f556f1f39fdf?w=800",
    },
    GalleryProject {
        id: 4,
        title: "Elegant Kitchen Design",
        category: "Kitchen",
        image: "https://images.unsplash.com/photo-1628745277862-bc0b2d68c50c?w=800",
    },
    GalleryProject {
        id: 5,
        title: "Sophisticated Dining",
        category: "Dining Room",
        image: "https://images.unsplash.com/photo-1616486886892-ff366aa67ba4?w=800",
    },
    GalleryProject {
        id: 6,
        title: "Warm Dining Space",
        category: "Dining Room",
        image: "https://images.unsplash.com/photo-1505409628601-edc9af17fda6?w=800",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_category_has_a_filter_button() {
        for project in GALLERY_PROJECTS {
            assert!(
                GALLERY_CATEGORIES.contains(&project.category),
                "no filter for category {}",
                project.category
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut service_ids: Vec<u32> = SERVICES.iter().map(|s| s.id).collect();
        service_ids.dedup();
        assert_eq!(service_ids.len(), SERVICES.len());

        let mut project_ids: Vec<u32> = GALLERY_PROJECTS.iter().map(|p| p.id).collect();
        project_ids.dedup();
        assert_eq!(project_ids.len(), GALLERY_PROJECTS.len());
    }
}
