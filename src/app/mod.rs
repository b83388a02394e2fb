pub mod render;
pub mod views;

pub use views::{
    CareerInfoView, ComparisonView, CourseDetailsView, CourseInfoView, CourseListView,
    DiscoveryView, NotFoundView, RecommendationView,
};
