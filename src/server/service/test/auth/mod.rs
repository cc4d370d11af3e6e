use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::SignupParams,
        service::auth::{token::TokenService, AuthService},
    },
};
use test_utils::builder::TestBuilder;

mod signup;

const SECRET: &str = "service-test-secret-long-enough-for-hs256";

fn signup_params(email: &str, role: &str) -> SignupParams {
    SignupParams {
        email: email.to_string(),
        password: "hunter22".to_string(),
        role: role.to_string(),
        name: "Pat Doe".to_string(),
    }
}
