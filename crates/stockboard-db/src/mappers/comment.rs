//! Comment entity <-> model mapper

use stockboard_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            title: model.title,
            content: model.content,
            created_on: model.created_on,
            stock_id: model.stock_id,
            app_user_id: model.app_user_id,
        }
    }
}
