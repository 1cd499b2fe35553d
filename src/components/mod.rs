//! UI Components
//!
//! Reusable Leptos components, one file per page block.

mod admin_products;
mod feed_sentinel;
mod home;
mod login_form;
mod main_reviews;
mod payment_form;
mod profile;
mod purchases;
mod read_more;
mod recovery_form;
mod register_form;
mod review_card;
mod review_feed;
mod title_bar;
mod user_reviews;

pub use admin_products::AdminProducts;
pub use feed_sentinel::FeedSentinel;
pub use home::HomePage;
pub use login_form::LoginForm;
pub use main_reviews::MainReviews;
pub use payment_form::PaymentForm;
pub use profile::ProfilePage;
pub use purchases::Purchases;
pub use read_more::ReadMoreText;
pub use recovery_form::RecoveryForm;
pub use register_form::RegisterForm;
pub use review_card::ReviewCard;
pub use review_feed::{AdminReviewFeed, ReviewFeed};
pub use title_bar::TitleBar;
pub use user_reviews::UserReviews;
