use terminal_size::{terminal_size, Width};

pub struct BannerInfo {
    pub version: String,
    pub model: String,
    pub style: String,
    pub settings_path: String,
}

pub fn print_startup_banner(info: &BannerInfo, use_colors: bool) {
    let term_width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80);

    let settings = shorten_path(&info.settings_path, term_width.saturating_sub(30));

    if !use_colors {
        println!();
        println!("🌍 英文表达参考助手 v{}", info.version);
        println!("输入中文，获取多种情景的英文表达参考");
        println!("模型: {}  风格: {}", info.model, info.style);
        println!("设置: {settings}");
        println!();
        println!("/help 查看命令  /style 切换风格  /quit 退出");
        println!();
        return;
    }

    // Speech bubble art lines (fixed width for alignment)
    let bubbles = [
        r"    .---------.    ",
        r"   (  Hello !  )   ",
        r"    '--. .----'    ",
        r"        V          ",
        r"       .-------.   ",
        r"      ( Hi ... )   ",
        r"       '-------'   ",
    ];

    // Info lines to display on the right
    let title = format!("\x1b[1;35m🌍 英文表达参考助手\x1b[0m v{}", info.version);
    let subtitle = "\x1b[90m输入中文，获取多种情景的英文表达参考\x1b[0m".to_string();
    let model_line = format!("\x1b[90m模型:\x1b[0m \x1b[36m{}\x1b[0m", info.model);
    let style_line = format!("\x1b[90m风格:\x1b[0m \x1b[33m{}\x1b[0m", info.style);
    let settings_line = format!("\x1b[90m设置:\x1b[0m {settings}");

    let info_lines: [&str; 7] = [
        &title,
        &subtitle,
        "",
        &model_line,
        &style_line,
        &settings_line,
        "",
    ];

    // Print side by side
    println!();
    for (i, bubble_line) in bubbles.iter().enumerate() {
        let info_line = info_lines.get(i).copied().unwrap_or("");
        println!("\x1b[36m{bubble_line}\x1b[0m   {info_line}");
    }
    println!();

    // Print helpful hints
    println!(
        "  \x1b[90m/help\x1b[0m 查看命令  \x1b[90m/style\x1b[0m 切换风格  \x1b[90m/quit\x1b[0m 退出"
    );
    println!();
}

fn shorten_path(path: &str, max_len: usize) -> String {
    // Replace home dir with ~
    let home = std::env::var("HOME").unwrap_or_default();
    let path = if !home.is_empty() && path.starts_with(&home) {
        format!("~{}", &path[home.len()..])
    } else {
        path.to_string()
    };

    if path.len() <= max_len {
        path
    } else {
        let keep = max_len.saturating_sub(3);
        // The byte cut can land inside a multi-byte character
        let mut cut = path.len().saturating_sub(keep);
        while !path.is_char_boundary(cut) {
            cut += 1;
        }
        format!("...{}", &path[cut..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_is_untouched() {
        assert_eq!(
            shorten_path("/etc/biaoda/settings.toml", 60),
            "/etc/biaoda/settings.toml"
        );
    }

    #[test]
    fn test_long_path_keeps_the_tail() {
        let path = "/very/long/nested/directory/tree/biaoda/settings.toml";
        let short = shorten_path(path, 20);
        assert!(short.starts_with("..."));
        assert!(short.ends_with("settings.toml"));
        assert!(short.len() <= 20);
    }

    #[test]
    fn test_truncation_lands_on_char_boundaries() {
        let path = format!("/tmp/{}/s.toml", "表".repeat(20));
        let short = shorten_path(&path, 50);
        assert!(short.starts_with("..."));
        assert!(short.ends_with("/s.toml"));
        assert!(short.len() <= 50);
    }
}
