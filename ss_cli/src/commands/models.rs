use crate::error::Result;
use ss_inference::model::list_pretrained;
use std::io::Write;

pub fn handle<W: Write>(out: &mut W) -> Result<()> {
    let models = list_pretrained();
    match models.len() {
        0 => {
            writeln!(out, "No models available.")?;
        }
        _ => {
            writeln!(out, "code\tdim\tdescription\n======")?;
            for model in models {
                writeln!(out, "{}\t{}\t{}", model.model_code, model.dim, model.description)?;
            }
        }
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_default_model() {
        let mut out = Vec::new();
        handle(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("code\tdim\tdescription"));
        assert!(output.to_lowercase().contains("all-minilm-l6-v2"));

        let codes: Vec<&str> = output
            .lines()
            .skip(2)
            .filter(|line| line.contains('\t'))
            .filter_map(|line| line.split('\t').next())
            .collect();
        assert!(codes.windows(2).all(|w| w[0] <= w[1]));

        let mut again = Vec::new();
        handle(&mut again).unwrap();
        assert_eq!(String::from_utf8(again).unwrap(), output);
    }
}
