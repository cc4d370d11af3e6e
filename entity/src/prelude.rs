pub use super::gym::Entity as Gym;
pub use super::gym_photo::Entity as GymPhoto;
pub use super::join_request::Entity as JoinRequest;
pub use super::member::Entity as Member;
pub use super::membership::Entity as Membership;
pub use super::membership_plan::Entity as MembershipPlan;
pub use super::message::Entity as Message;
pub use super::plan::Entity as Plan;
pub use super::plan_request::Entity as PlanRequest;
pub use super::renewal_request::Entity as RenewalRequest;
pub use super::trainer::Entity as Trainer;
pub use super::user::Entity as User;
