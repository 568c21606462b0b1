//! Application orchestration.
//!
//! [`App`] ties the pipeline together: prepare datasets from the corpus,
//! load or train a model, print the evaluation report and run the
//! interactive loop. It only knows the ML layer through [`Toolkit`].

use std::io::{BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ClassifierConfig;
use crate::corpus::loader::CorpusLoader;
use crate::corpus::splitter::{CorpusSplitter, Split};
use crate::dataset::{remove_dataset_files, write_dataset};
use crate::document::category::CategoryMap;
use crate::error::{ClassifierError, Result};
use crate::interactive::PredictionLoop;
use crate::ml::metrics::Metrics;
use crate::ml::toolkit::Toolkit;
use crate::report::write_evaluation_report;

pub struct App<T: Toolkit> {
    config: ClassifierConfig,
    categories: CategoryMap,
    toolkit: T,
}

impl<T: Toolkit> App<T> {
    pub fn new(config: ClassifierConfig, toolkit: T) -> Result<Self> {
        config.validate()?;
        let categories = config.category_map()?;
        Ok(Self {
            config,
            categories,
            toolkit,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Random source for the corpus split: seeded when configured, else from the OS.
    pub fn split_rng(&self) -> StdRng {
        match self.config.split.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Rebuild both dataset files from the corpus.
    pub fn prepare_data<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Split> {
        let paths = &self.config.paths;
        remove_dataset_files(paths)?;

        let documents = CorpusLoader::new(&paths.data_dir).load(self.categories.categories())?;
        let split = CorpusSplitter::new(self.config.split.training_percent)
            .with_rounding(self.config.split.rounding)
            .split(documents, self.categories.categories(), rng);
        info!(
            "Split corpus into {} training and {} test documents",
            split.training.len(),
            split.test.len()
        );

        write_dataset(&paths.training_set, &split.training)?;
        write_dataset(&paths.test_set, &split.test)?;
        Ok(split)
    }

    /// Prepare datasets, fit a model on the training file and save it.
    pub fn train<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T::Model> {
        self.prepare_data(rng)?;
        let training = self.toolkit.read_dataset(&self.config.paths.training_set)?;
        let model = self.toolkit.fit(&training, &self.categories)?;
        self.toolkit.save(&model, &self.config.paths.model)?;
        Ok(model)
    }

    /// Load the saved model if it is usable.
    ///
    /// Returns `None` when there is no model file, when it cannot be loaded,
    /// or when it was trained for a different category list.
    pub fn load_model(&self) -> Option<T::Model> {
        let path = &self.config.paths.model;
        if !path.exists() {
            info!("No model at {}, training a new one", path.display());
            return None;
        }

        match self.toolkit.load(path) {
            Ok(model) if self.toolkit.classes(&model) == &self.categories => Some(model),
            Ok(model) => {
                warn!(
                    "Model {} was trained for {:?}, configured categories are {:?}; retraining",
                    path.display(),
                    self.toolkit.classes(&model).categories(),
                    self.categories.categories()
                );
                None
            }
            Err(e) => {
                warn!("Cannot use model {}: {e}; retraining", path.display());
                None
            }
        }
    }

    pub fn load_or_train<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T::Model> {
        match self.load_model() {
            Some(model) => Ok(model),
            None => self.train(rng),
        }
    }

    /// Score the configured evaluation set and print the report.
    pub fn evaluate<W: Write + ?Sized>(&self, model: &T::Model, out: &mut W) -> Result<Metrics> {
        let path = self.config.evaluation_set();
        let dataset = self.toolkit.read_dataset(path)?;
        if dataset.is_empty() {
            return Err(ClassifierError::dataset(path, "no rows to evaluate"));
        }

        let metrics = self.toolkit.evaluate(model, &dataset)?;
        info!(
            "Evaluated {} rows from {}",
            metrics.sample_count,
            path.display()
        );
        write_evaluation_report(out, &metrics)?;
        Ok(metrics)
    }

    /// Start the interactive prediction loop.
    pub fn interact<R: BufRead, W: Write>(&self, model: &T::Model, input: R, output: W) -> Result<()> {
        PredictionLoop::new(&self.toolkit, model, &self.config.exit_sentinel).run(input, output)
    }

    /// Load or train, report, then serve predictions from `input`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut rng = self.split_rng();
        let model = self.load_or_train(&mut rng)?;
        self.evaluate(&model, &mut output)?;
        self.interact(&model, input, output)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::config::EvaluationTarget;
    use crate::document::category::Category;
    use crate::document::document::Document;
    use crate::ml::prediction::Prediction;

    /// Records the class map as its model and predicts the first class.
    struct StubToolkit;

    impl Toolkit for StubToolkit {
        type Model = CategoryMap;

        fn fit(&self, training: &[Document], categories: &CategoryMap) -> Result<CategoryMap> {
            if training.is_empty() {
                return Err(ClassifierError::training("empty"));
            }
            Ok(categories.clone())
        }

        fn predict(&self, model: &CategoryMap, _: &Document) -> Result<Prediction> {
            let mut scores = vec![0.0; model.len()];
            scores[0] = 1.0;
            Ok(Prediction { scores })
        }

        fn save(&self, model: &CategoryMap, path: &Path) -> Result<()> {
            fs::write(path, serde_json::to_string(model)?)?;
            Ok(())
        }

        fn load(&self, path: &Path) -> Result<CategoryMap> {
            Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
        }

        fn classes<'m>(&self, model: &'m CategoryMap) -> &'m CategoryMap {
            model
        }
    }

    fn write_corpus(base: &Path, categories: &[Category], files: usize) {
        for category in categories {
            let dir = base.join(category.as_str());
            fs::create_dir_all(&dir).unwrap();
            for i in 0..files {
                fs::write(
                    dir.join(format!("{i:03}.txt")),
                    format!("{category} headline {i}\n\n{category} lead {i}\nbody\n"),
                )
                .unwrap();
            }
        }
    }

    fn config_in(dir: &Path, categories: Vec<Category>) -> ClassifierConfig {
        let mut config = ClassifierConfig::default();
        config.categories = categories;
        config.paths.data_dir = dir.join("bbc");
        config.paths.training_set = dir.join("news-train.txt");
        config.paths.test_set = dir.join("news-test.txt");
        config.paths.model = dir.join("model.txt");
        config.split.seed = Some(7);
        config
    }

    #[test]
    fn test_train_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![Category::Sport, Category::Tech];
        write_corpus(&dir.path().join("bbc"), &categories, 100);
        let app = App::new(config_in(dir.path(), categories.clone()), StubToolkit).unwrap();

        let mut rng = app.split_rng();
        let model = app.load_or_train(&mut rng).unwrap();
        assert_eq!(model.categories(), categories.as_slice());
        assert!(app.config().paths.model.exists());

        let train = fs::read_to_string(&app.config().paths.training_set).unwrap();
        let test = fs::read_to_string(&app.config().paths.test_set).unwrap();
        assert_eq!(train.lines().count(), 160);
        assert_eq!(test.lines().count(), 40);

        // Second start reuses the saved model without touching the datasets.
        fs::remove_file(&app.config().paths.training_set).unwrap();
        assert!(app.load_model().is_some());
    }

    #[test]
    fn test_category_mismatch_retrains() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![Category::Sport, Category::Tech];
        write_corpus(&dir.path().join("bbc"), &categories, 100);
        let config = config_in(dir.path(), categories);
        fs::write(
            &config.paths.model,
            serde_json::to_string(&CategoryMap::default()).unwrap(),
        )
        .unwrap();

        let app = App::new(config, StubToolkit).unwrap();
        assert!(app.load_model().is_none());
        let model = app.load_or_train(&mut app.split_rng()).unwrap();
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_corrupt_model_retrains() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![Category::Politics];
        write_corpus(&dir.path().join("bbc"), &categories, 100);
        let config = config_in(dir.path(), categories);
        fs::write(&config.paths.model, "garbage").unwrap();

        let app = App::new(config, StubToolkit).unwrap();
        assert!(app.load_model().is_none());
        assert!(app.load_or_train(&mut app.split_rng()).is_ok());
    }

    #[test]
    fn test_evaluation_target_selects_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![Category::Sport, Category::Tech];
        write_corpus(&dir.path().join("bbc"), &categories, 100);

        let mut config = config_in(dir.path(), categories);
        config.evaluation_target = EvaluationTarget::Test;
        let app = App::new(config.clone(), StubToolkit).unwrap();
        let model = app.load_or_train(&mut app.split_rng()).unwrap();

        let mut out = Vec::new();
        let metrics = app.evaluate(&model, &mut out).unwrap();
        assert_eq!(metrics.sample_count, 40);

        // Removing the training file must not matter when scoring the test set.
        fs::remove_file(&config.paths.training_set).unwrap();
        assert_eq!(app.evaluate(&model, &mut out).unwrap().sample_count, 40);

        config.evaluation_target = EvaluationTarget::Training;
        let app = App::new(config, StubToolkit).unwrap();
        let model = app.train(&mut app.split_rng()).unwrap();
        let metrics = app.evaluate(&model, &mut Vec::new()).unwrap();
        assert_eq!(metrics.sample_count, 160);
    }

    #[test]
    fn test_missing_corpus_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(config_in(dir.path(), vec![Category::Tech]), StubToolkit).unwrap();
        let err = app.load_or_train(&mut app.split_rng()).unwrap_err();
        assert!(matches!(err, ClassifierError::Corpus { .. }));
    }

    #[test]
    fn test_run_prints_report_then_loop() {
        let dir = tempfile::tempdir().unwrap();
        let categories = vec![Category::Sport, Category::Tech];
        write_corpus(&dir.path().join("bbc"), &categories, 100);
        let app = App::new(config_in(dir.path(), categories), StubToolkit).unwrap();

        let mut out = Vec::new();
        app.run("some text\nExit\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        // Stub always predicts sport: half the training rows are right.
        assert!(out.starts_with("\nPredictionModel quality metrics evaluation\n"));
        assert!(out.contains("AccuracyMicro: 50.00%\n"));
        assert!(out.contains("AccuracyMacro: 50.00%\n"));
        assert!(out.contains("Prediction result:\nsport: 100.00%\ntech: 0.00%\n"));
        assert!(out.ends_with("\nInput text: \n"));
    }
}
