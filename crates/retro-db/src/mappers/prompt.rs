//! Reflect prompt entity <-> model mapper

use retro_core::ReflectPrompt;

use crate::models::ReflectPromptModel;

/// Convert ReflectPromptModel to ReflectPrompt entity
impl From<ReflectPromptModel> for ReflectPrompt {
    fn from(model: ReflectPromptModel) -> Self {
        ReflectPrompt {
            id: model.id,
            template_id: model.template_id,
            team_id: model.team_id,
            question: model.question,
            description: model.description,
            group_color: model.group_color,
            sort_order: model.sort_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
            removed_at: model.removed_at,
        }
    }
}
