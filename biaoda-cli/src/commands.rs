use biaoda_core::chat::ChatSession;
use biaoda_core::prompt::StylePreference;

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

pub enum LocalCommandResult {
    Handled {
        msg: String,
    },

    /// A command to exit the app was detected
    Exit,

    /// The input was not a command (and should be sent to the provider).
    Unhandled,
}

pub fn available_commands() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            name: "style",
            description: "切换表达风格",
            usage: "/style <风格>",
        },
        CommandInfo {
            name: "styles",
            description: "查看可选的表达风格",
            usage: "/styles",
        },
        CommandInfo {
            name: "guide",
            description: "查看使用指南",
            usage: "/guide",
        },
        CommandInfo {
            name: "examples",
            description: "查看示例输入",
            usage: "/examples",
        },
        CommandInfo {
            name: "clear",
            description: "清空当前对话",
            usage: "/clear",
        },
        CommandInfo {
            name: "help",
            description: "查看可用命令",
            usage: "/help",
        },
        CommandInfo {
            name: "quit",
            description: "退出",
            usage: "/quit",
        },
    ]
}

pub fn handle_local_command(session: &mut ChatSession, input: &str) -> LocalCommandResult {
    let input = input.trim();
    if !input.starts_with('/') {
        return LocalCommandResult::Unhandled;
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or("");

    match command {
        "/style" => handle_style_command(session, arg),
        "/styles" => LocalCommandResult::Handled {
            msg: styles_listing(session),
        },
        "/guide" => LocalCommandResult::Handled {
            msg: guide_text().to_string(),
        },
        "/examples" => LocalCommandResult::Handled {
            msg: examples_text().to_string(),
        },
        "/clear" => {
            session.clear();
            LocalCommandResult::Handled {
                msg: "对话已清空".to_string(),
            }
        }
        "/help" => LocalCommandResult::Handled {
            msg: help_listing(),
        },
        "/exit" | "/quit" => LocalCommandResult::Exit,
        other => LocalCommandResult::Handled {
            msg: format!("未知命令: {other}。输入 /help 查看可用命令"),
        },
    }
}

fn handle_style_command(session: &mut ChatSession, arg: &str) -> LocalCommandResult {
    if arg.is_empty() {
        return LocalCommandResult::Handled {
            msg: styles_listing(session),
        };
    }

    match StylePreference::parse(arg) {
        Some(style) => {
            let msg = if session.set_style(style) {
                format!("已切换到: {style}风格")
            } else {
                format!("当前已是: {style}风格")
            };
            LocalCommandResult::Handled { msg }
        }
        None => LocalCommandResult::Handled {
            msg: format!("未知风格: {arg}。输入 /styles 查看可选风格"),
        },
    }
}

fn styles_listing(session: &ChatSession) -> String {
    let mut lines = vec!["可选风格:".to_string()];
    for style in StylePreference::all() {
        let marker = if style == session.style() { "●" } else { " " };
        lines.push(format!("  {marker} {} ({})", style.label(), style.name()));
    }
    lines.push("使用 /style <风格> 切换".to_string());
    lines.join("\n")
}

fn guide_text() -> &'static str {
    "📚 使用指南\n\
     如何使用：\n\
     1. 直接输入中文句子\n\
     2. 使用 /style 选择偏好的表达风格\n\
     3. 查看多种英文表达参考\n\
     4. 选择最适合您情景的表达\n\
     \n\
     适用场景：\n\
     • 日常口语交流\n\
     • 商务邮件写作\n\
     • 学术论文表达\n\
     • 情感表达优化"
}

fn examples_text() -> &'static str {
    "🎯 示例输入\n\
     我以为他们会感到沮丧，因为下雨，不能外出。\n\
     今天的工作进展很顺利。\n\
     这个想法听起来很有创意。"
}

fn help_listing() -> String {
    let mut lines = vec!["可用命令:".to_string()];
    for cmd in available_commands() {
        lines.push(format!("  {:<14} {}", cmd.usage, cmd.description));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new(StylePreference::default())
    }

    fn handled_msg(result: LocalCommandResult) -> String {
        match result {
            LocalCommandResult::Handled { msg } => msg,
            LocalCommandResult::Exit => panic!("Expected Handled, got Exit"),
            LocalCommandResult::Unhandled => panic!("Expected Handled, got Unhandled"),
        }
    }

    #[test]
    fn test_plain_text_is_unhandled() {
        let mut session = session();
        assert!(matches!(
            handle_local_command(&mut session, "今天天气很好"),
            LocalCommandResult::Unhandled
        ));
    }

    #[test]
    fn test_style_command_switches_by_label() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/style 口语交流"));
        assert_eq!(msg, "已切换到: 口语交流风格");
        assert_eq!(session.style(), StylePreference::Conversational);
    }

    #[test]
    fn test_style_command_accepts_ascii_name() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/style business"));
        assert_eq!(msg, "已切换到: 商务书面风格");
        assert_eq!(session.style(), StylePreference::Business);
    }

    #[test]
    fn test_style_command_reports_no_change() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/style 综合推荐"));
        assert_eq!(msg, "当前已是: 综合推荐风格");
    }

    #[test]
    fn test_unknown_style_points_at_styles() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/style 文言文"));
        assert!(msg.contains("未知风格: 文言文"));
        assert!(msg.contains("/styles"));
        assert_eq!(session.style(), StylePreference::Comprehensive);
    }

    #[test]
    fn test_bare_style_lists_styles_with_marker() {
        let mut session = session();
        session.set_style(StylePreference::Academic);
        let msg = handled_msg(handle_local_command(&mut session, "/style"));
        assert!(msg.contains("● 学术写作"));
        assert!(msg.contains("口语交流"));
    }

    #[test]
    fn test_clear_resets_transcript() {
        let mut session = session();
        session.append(biaoda_core::chat::Turn::user("一句话"));
        let msg = handled_msg(handle_local_command(&mut session, "/clear"));
        assert_eq!(msg, "对话已清空");
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn test_quit_and_exit_both_exit() {
        let mut session = session();
        assert!(matches!(
            handle_local_command(&mut session, "/quit"),
            LocalCommandResult::Exit
        ));
        assert!(matches!(
            handle_local_command(&mut session, "/exit"),
            LocalCommandResult::Exit
        ));
    }

    #[test]
    fn test_unknown_command_points_at_help() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/bogus"));
        assert!(msg.contains("未知命令: /bogus"));
        assert!(msg.contains("/help"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut session = session();
        let msg = handled_msg(handle_local_command(&mut session, "/help"));
        for cmd in available_commands() {
            assert!(msg.contains(cmd.usage), "Missing {} in help", cmd.usage);
        }
    }
}
