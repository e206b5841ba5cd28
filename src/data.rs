//! Static page content.

/// A section of the page reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section_id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { section_id: "home", label: "Home" },
    NavItem { section_id: "features", label: "Features" },
    NavItem { section_id: "gallery", label: "Gallery" },
    NavItem { section_id: "analytics", label: "Analytics" },
    NavItem { section_id: "contact", label: "Contact" },
];

/// Keywords offered by the search box, in display order.
pub const SEARCH_CORPUS: &[&str] = &[
    "Responsive Design",
    "Dark Theme",
    "Light Theme",
    "JavaScript",
    "HTML5",
    "CSS3",
    "Web Development",
    "Frontend",
    "Backend",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "MongoDB",
    "API",
    "REST",
    "GraphQL",
    "TypeScript",
    "Webpack",
    "Vite",
    "Bootstrap",
    "Tailwind",
    "SASS",
    "LESS",
    "jQuery",
    "Animation",
    "Responsive",
    "Mobile First",
    "Progressive Web App",
    "PWA",
];

pub const GALLERY_IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181298/pexels-photo-1181298.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181316/pexels-photo-1181316.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181345/pexels-photo-1181345.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181396/pexels-photo-1181396.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1181406/pexels-photo-1181406.jpeg?auto=compress&cs=tinysrgb&w=400",
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-mobile-alt",
        title: "Responsive Design",
        desc: "Layouts that adapt from phones to wide desktop displays.",
    },
    Feature {
        icon: "fas fa-moon",
        title: "Dark Theme",
        desc: "Switch between light and dark; your choice is remembered.",
    },
    Feature {
        icon: "fas fa-search",
        title: "Instant Search",
        desc: "Filter topics as you type with matches highlighted.",
    },
    Feature {
        icon: "fas fa-images",
        title: "Image Gallery",
        desc: "Browse a grid of photos and flip through them full screen.",
    },
    Feature {
        icon: "fas fa-chart-line",
        title: "Live Charts",
        desc: "Weekly activity drawn on a canvas with a smooth grow-in.",
    },
    Feature {
        icon: "fas fa-envelope",
        title: "Contact Form",
        desc: "Validated fields with inline feedback before sending.",
    },
];
