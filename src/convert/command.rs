use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use log::debug;
use crate::constants::{INKSCAPE_PROGRAM, RSVG_CONVERT_PROGRAM};
use crate::error::MechanismError;
use super::Mechanism;

// 引数の組み立て方（ツールごとにフラグが異なる）
type ArgsBuilder = fn(&Path, &Path, u32) -> Vec<OsString>;

/// 外部コマンドによる変換（終了まで待機する）
pub struct CommandMechanism {
    program: String,
    build_args: ArgsBuilder,
}

impl CommandMechanism {
    pub fn new(program: impl Into<String>, build_args: ArgsBuilder) -> Self {
        Self {
            program: program.into(),
            build_args,
        }
    }

    /// rsvg-convert -w N -h N <input> -o <output>
    pub fn rsvg_convert() -> Self {
        Self::new(RSVG_CONVERT_PROGRAM, rsvg_convert_args)
    }

    /// inkscape <input> --export-type=png --export-filename=<output> -w N -h N
    pub fn inkscape() -> Self {
        Self::new(INKSCAPE_PROGRAM, inkscape_args)
    }

    pub fn args(&self, input: &Path, output: &Path, size: u32) -> Vec<OsString> {
        (self.build_args)(input, output, size)
    }
}

fn rsvg_convert_args(input: &Path, output: &Path, size: u32) -> Vec<OsString> {
    vec![
        "-w".into(),
        size.to_string().into(),
        "-h".into(),
        size.to_string().into(),
        input.as_os_str().to_os_string(),
        "-o".into(),
        output.as_os_str().to_os_string(),
    ]
}

fn inkscape_args(input: &Path, output: &Path, size: u32) -> Vec<OsString> {
    let mut export_filename = OsString::from("--export-filename=");
    export_filename.push(output.as_os_str());

    vec![
        input.as_os_str().to_os_string(),
        "--export-type=png".into(),
        export_filename,
        "-w".into(),
        size.to_string().into(),
        "-h".into(),
        size.to_string().into(),
    ]
}

impl Mechanism for CommandMechanism {
    fn name(&self) -> &str {
        &self.program
    }

    fn attempt(&self, input: &Path, output: &Path, size: u32) -> Result<(), MechanismError> {
        let args = self.args(input, output, size);
        debug!("実行: {} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => MechanismError::ToolMissing(self.program.clone()),
                _ => MechanismError::Io(e),
            })?;

        if !result.status.success() {
            return Err(MechanismError::ToolFailed {
                tool: self.program.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvg_convert_args() {
        let args = CommandMechanism::rsvg_convert().args(
            Path::new("assets/icon.svg"),
            Path::new("assets/icon.png"),
            1024,
        );
        let expected: Vec<OsString> = ["-w", "1024", "-h", "1024", "assets/icon.svg", "-o", "assets/icon.png"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_inkscape_args() {
        let args = CommandMechanism::inkscape().args(
            Path::new("assets/icon.svg"),
            Path::new("assets/splash-icon.png"),
            512,
        );
        assert_eq!(args[0], OsString::from("assets/icon.svg"));
        assert_eq!(args[2], OsString::from("--export-filename=assets/splash-icon.png"));
        assert!(args.contains(&OsString::from("512")));
    }

    #[test]
    fn test_missing_program_is_tool_missing() {
        let mechanism = CommandMechanism::new("icon-assets-no-such-tool", rsvg_convert_args);
        let result = mechanism.attempt(Path::new("in.svg"), Path::new("out.png"), 16);
        assert!(matches!(result, Err(MechanismError::ToolMissing(name)) if name == "icon-assets-no-such-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failed() {
        // `false` は引数を無視して終了コード1を返す
        let mechanism = CommandMechanism::new("false", rsvg_convert_args);
        let result = mechanism.attempt(Path::new("in.svg"), Path::new("out.png"), 16);
        assert!(matches!(result, Err(MechanismError::ToolFailed { .. })));
    }
}
