use crate::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const TEMPLATES: &str = r#"MC@<pl-question-panel>{{ question }}</pl-question-panel>
<pl-checkbox answers-name="{{ id }}">
  <pl-answer correct="{{ flag1 }}">{{ option1 }}</pl-answer>
  <pl-answer correct="{{ flag2 }}">{{ option2 }}</pl-answer>
</pl-checkbox>
###
SI@<pl-question-panel>{{ question1 }} <pl-string-input answers-name="ans"></pl-string-input> {{ question2 }}</pl-question-panel>
```
def grade(data):
    data["correct_answers"]["ans"] = "{{ answer }}"
```
###
IJ@{
  "uuid": "{{ uuid }}",
  "title": "{{ title }}",
  "topic": "{{ topic }}",
  "tags": {{ tags }}
}
###
"#;

pub(crate) const BANK: &str = "# Practice bank

###
id: 1
type: MCQ
question: 2+2=?
option1: 3
*option2: 4
title: Sum
topic: Math
tags: easy, arithmetic

###
id: 2
type: String Input
question: 6*7 = ___ exactly
answer: 42
title: Product
topic: Math

###
id: 3
type: Essay
question: Describe a river.
title: Rivers
topic: Geography
";

pub(crate) const CONFIG: &str = "template_file: template.md
banks: [bank.md]
output_dir: out
";

/// A temporary directory holding a config, template file and one bank.
pub(crate) struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self::with_bank(BANK)
    }

    pub(crate) fn with_bank(bank: &str) -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write("template.md", TEMPLATES);
        fixture.write("bank.md", bank);
        fixture.write("qbgen.yaml", CONFIG);
        fixture
    }

    pub(crate) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub(crate) fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.path("qbgen.yaml")
    }

    pub(crate) fn config(&self) -> Config {
        Config::load(self.config_path()).unwrap()
    }

    pub(crate) fn out(&self) -> PathBuf {
        self.path("out")
    }
}

pub(crate) fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}
