//! Icon tags referenced by content tables.
//!
//! Content never stores a renderer. It stores one of these tags and the
//! client looks up the matching SVG path.

/// Every icon the site renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    MapPin,
    Phone,
    Mail,
    Clock,
    Ruler,
    Building,
    Home,
    Calendar,
    Car,
    ArrowUpDown,
    Layers,
    Download,
    Award,
    Shield,
    Users,
    TrendingUp,
    Facebook,
    Instagram,
    Linkedin,
    Quote,
}
