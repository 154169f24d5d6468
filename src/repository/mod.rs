pub mod buyer_repo;
pub mod recommendation_repo;
pub mod submission_repo;

pub use buyer_repo::BuyerRepository;
pub use recommendation_repo::RecommendationRepository;
pub use submission_repo::SubmissionRepository;
