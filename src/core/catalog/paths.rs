use crate::core::transform::Transform;
use crate::core::types::Category;
use regex::Captures;

/// Folders Windows shows under "This PC" without their full path.
const THIS_PC_FOLDERS: [&str; 7] = [
    "3D Objects",
    "Desktop",
    "Documents",
    "Downloads",
    "Music",
    "Pictures",
    "Videos",
];

pub(super) fn definitions() -> Vec<Transform> {
    vec![
        Transform::new("Unix Path", "unix-path", Category::Paths, to_unix_path)
            .describe("Replaces every backslash with a forward slash")
            .input_label("Windows path"),
        Transform::new("Windows Path", "windows-path", Category::Paths, to_windows_path)
            .describe(
                "Replaces forward slashes with backslashes. Git Bash (/c/...) and WSL \
                 (/mnt/c/...) drive prefixes become C: style drive letters.",
            )
            .input_label("POSIX path"),
        Transform::new("To Git Bash Path", "git-bash-2", Category::Paths, to_git_bash_path)
            .describe("Converts a Windows path such as C:\\Users into a Git Bash path (/c/Users)")
            .input_label("Windows path"),
        Transform::new("To WSL Path", "wsl-path-2", Category::Paths, to_wsl_path)
            .describe("Converts a Windows path such as C:\\Users into a WSL mount path (/mnt/c/Users)")
            .input_label("Windows path"),
        Transform::new(
            "This PC Folders to Full Path",
            "this-pc-full-path",
            Category::Paths,
            this_pc_full_path,
        )
        .describe(
            "Prefixes folders shown under This PC (3D Objects, Desktop, Documents, Downloads, \
             Music, Pictures, Videos) with C:\\Users\\%USERNAME%",
        )
        .input_label("Folder path"),
    ]
}

fn to_unix_path(text: &str) -> String {
    text.replace('\\', "/")
}

fn to_windows_path(text: &str) -> String {
    let with_drive = static_regex!(r"(?m)^/(?:mnt/)?([A-Za-z])(/|$)").replace_all(
        text,
        |caps: &Captures<'_>| format!("{}:{}", caps[1].to_uppercase(), &caps[2]),
    );
    with_drive.replace('/', "\\")
}

fn rewrite_drive(text: &str, mount: &str) -> String {
    let forward = to_unix_path(text);
    static_regex!(r"(?m)^([A-Za-z]):")
        .replace_all(&forward, |caps: &Captures<'_>| {
            format!("{}/{}", mount, caps[1].to_lowercase())
        })
        .into_owned()
}

fn to_git_bash_path(text: &str) -> String {
    rewrite_drive(text, "")
}

fn to_wsl_path(text: &str) -> String {
    rewrite_drive(text, "/mnt")
}

fn this_pc_full_path(text: &str) -> String {
    if THIS_PC_FOLDERS.iter().any(|folder| text.starts_with(folder)) {
        format!("C:\\Users\\%USERNAME%\\{}", text)
    } else {
        text.to_string()
    }
}
