use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::db::Database;
use crate::handlers::{help, random_artwork, start};
use crate::met::MetClient;
use crate::system_info::get_system_info;
use crate::texts::{text, TextKey};

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "choose a language and show the main menu.")]
    Start,
    #[command(description = "display the help guide.")]
    Help,
    #[command(description = "discover a random artwork.")]
    Random,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message, db: Database, met: MetClient) -> Result<()> {
        let chat_id = msg.chat.id;
        let locale = db.locale_or_default(chat_id).await;

        let outcome = match self {
            Command::Start => start(bot.clone(), msg, db).await,
            Command::Help => help(bot.clone(), chat_id, locale).await,
            Command::Random => random_artwork(bot.clone(), chat_id, met, locale).await,
            Command::Info => {
                bot.send_message(chat_id, get_system_info()).await?;
                Ok(())
            }
        };

        // Command failures get a friendly localized reply instead of silence.
        if let Err(err) = outcome {
            tracing::warn!(error = %err, chat_id = chat_id.0, "command failed");
            bot.send_message(chat_id, text(locale, TextKey::ErrorGeneral))
                .await?;
        }
        Ok(())
    }
}
