//! Direct messages between members and trainers of the same gym.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{member::MemberRepository, message::MessageRepository, trainer::TrainerRepository},
        error::{auth::AuthError, AppError},
        model::{
            message::{Conversation, CreateMessageParams, Message},
            user::User,
        },
        service::scope::GymScope,
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a message to a counterpart in the sender's gym.
    ///
    /// Members may write to trainers of their gym and trainers to members of
    /// theirs.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::BadRequest)` - Missing recipient or blank content
    /// - `Err(AppError::NotFound)` - Recipient is not a counterpart in the gym
    pub async fn send(
        &self,
        sender: &User,
        recipient_id: Option<i32>,
        content: String,
    ) -> Result<Message, AppError> {
        let Some(recipient_id) = recipient_id.filter(|_| !content.trim().is_empty()) else {
            return Err(AppError::bad_request(
                "Recipient ID and content are required",
            ));
        };

        let scope = GymScope::new(self.db);
        let (gym_id, recipient_in_gym) = match sender.role {
            Role::Member => {
                let member = scope.member(sender).await?;
                let trainer = TrainerRepository::new(self.db)
                    .find_by_user_in_gym(recipient_id, member.gym_id)
                    .await?;
                (member.gym_id, trainer.is_some())
            }
            Role::Trainer => {
                let trainer = scope.trainer(sender).await?;
                let member = MemberRepository::new(self.db)
                    .find_by_user_in_gym(recipient_id, trainer.gym_id)
                    .await?;
                (trainer.gym_id, member.is_some())
            }
            role => {
                return Err(AuthError::AccessDenied {
                    user_id: sender.id,
                    role,
                    reason: "only members and trainers exchange messages".to_string(),
                }
                .into())
            }
        };

        if !recipient_in_gym {
            return Err(AppError::not_found("Recipient not found in your gym"));
        }

        Ok(MessageRepository::new(self.db)
            .create(CreateMessageParams {
                sender_id: sender.id,
                recipient_id,
                gym_id,
                content,
            })
            .await?)
    }

    /// The trainers of the calling member's gym and the messages exchanged
    /// with them, oldest first.
    pub async fn member_conversation(&self, member_user: &User) -> Result<Conversation, AppError> {
        let member = GymScope::new(self.db).member(member_user).await?;

        let trainers: Vec<User> = TrainerRepository::new(self.db)
            .get_by_gym_with_users(member.gym_id)
            .await?
            .into_iter()
            .map(|t| t.user)
            .collect();

        self.conversation(member_user, trainers, member.gym_id).await
    }

    /// The members of the calling trainer's gym and the messages exchanged
    /// with them, oldest first.
    pub async fn trainer_conversation(
        &self,
        trainer_user: &User,
    ) -> Result<Conversation, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        let members: Vec<User> = MemberRepository::new(self.db)
            .get_by_gym_with_users(trainer.gym_id)
            .await?
            .into_iter()
            .map(|m| m.user)
            .collect();

        self.conversation(trainer_user, members, trainer.gym_id).await
    }

    async fn conversation(
        &self,
        user: &User,
        counterparts: Vec<User>,
        gym_id: i32,
    ) -> Result<Conversation, AppError> {
        let counterpart_ids: Vec<i32> = counterparts.iter().map(|u| u.id).collect();
        let messages = MessageRepository::new(self.db)
            .get_conversation(user.id, &counterpart_ids, gym_id)
            .await?;

        Ok(Conversation {
            counterparts,
            messages,
        })
    }
}
