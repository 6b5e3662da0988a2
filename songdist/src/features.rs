use std::collections::HashMap;

use crate::error::{Result, SongDistError};

/// Valid range and human readable description of a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureInfo {
    pub min: f32,
    /// `None` for features without a fixed upper bound
    pub max: Option<f32>,
    pub description: &'static str,
}

/// Lookup of feature metadata by feature name.
pub trait FeatureCatalog {
    fn info(&self, name: &str) -> Option<&FeatureInfo>;
}

impl FeatureCatalog for HashMap<String, FeatureInfo> {
    fn info(&self, name: &str) -> Option<&FeatureInfo> {
        self.get(name)
    }
}

pub fn description<'c, C: FeatureCatalog + ?Sized>(catalog: &'c C, name: &str) -> Result<&'c str> {
    catalog
        .info(name)
        .map(|info| info.description)
        .ok_or_else(|| SongDistError::UnknownFeature(name.to_owned()))
}

/// The audio features published for every track by the streaming service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioFeatures;

impl AudioFeatures {
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        AUDIO_FEATURES.iter().map(|(name, _)| *name)
    }
}

impl FeatureCatalog for AudioFeatures {
    fn info(&self, name: &str) -> Option<&FeatureInfo> {
        AUDIO_FEATURES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, info)| info)
    }
}

const fn unit(description: &'static str) -> FeatureInfo {
    FeatureInfo {
        min: 0.0,
        max: Some(1.0),
        description,
    }
}

static AUDIO_FEATURES: [(&str, FeatureInfo); 13] = [
    (
        "danceability",
        unit("Danceability describes how suitable a track is for dancing based on a combination of musical elements including tempo, rhythm stability, beat strength, and overall regularity. A value of 0.0 is least danceable and 1.0 is most danceable."),
    ),
    (
        "energy",
        unit("Energy is a measure from 0.0 to 1.0 and represents a perceptual measure of intensity and activity. Typically, energetic tracks feel fast, loud, and noisy. For example, death metal has high energy, while a Bach prelude scores low on the scale. Perceptual features contributing to this attribute include dynamic range, perceived loudness, timbre, onset rate, and general entropy."),
    ),
    (
        "loudness",
        FeatureInfo {
            min: -60.0,
            max: Some(0.0),
            description: "The overall loudness of a track in decibels (dB). Loudness values are averaged across the entire track and are useful for comparing relative loudness of tracks. Loudness is the quality of a sound that is the primary psychological correlate of physical strength (amplitude). Values typical range between -60 and 0 db.",
        },
    ),
    (
        "key",
        FeatureInfo {
            min: 0.0,
            max: Some(11.0),
            description: "The key the track is in. Integers map to pitches using standard Pitch Class notation . E.g. 0 = C, 1 = C♯/D♭, 2 = D, and so on.",
        },
    ),
    (
        "mode",
        unit("Mode indicates the modality (major or minor) of a track, the type of scale from which its melodic content is derived. Major is represented by 1 and minor is 0."),
    ),
    (
        "speechiness",
        unit("Speechiness detects the presence of spoken words in a track. The more exclusively speech-like the recording (e.g. talk show, audio book, poetry), the closer to 1.0 the attribute value. Values above 0.66 describe tracks that are probably made entirely of spoken words. Values between 0.33 and 0.66 describe tracks that may contain both music and speech, either in sections or layered, including such cases as rap music. Values below 0.33 most likely represent music and other non-speech-like tracks."),
    ),
    (
        "acousticness",
        unit("A confidence measure from 0.0 to 1.0 of whether the track is acoustic. 1.0 represents high confidence the track is acoustic."),
    ),
    (
        "instrumentalness",
        unit("Predicts whether a track contains no vocals. “Ooh” and “aah” sounds are treated as instrumental in this context. Rap or spoken word tracks are clearly “vocal”. The closer the instrumentalness value is to 1.0, the greater likelihood the track contains no vocal content. Values above 0.5 are intended to represent instrumental tracks, but confidence is higher as the value approaches 1.0."),
    ),
    (
        "liveness",
        unit("Detects the presence of an audience in the recording. Higher liveness values represent an increased probability that the track was performed live. A value above 0.8 provides strong likelihood that the track is live."),
    ),
    (
        "valence",
        unit("A measure from 0.0 to 1.0 describing the musical positiveness conveyed by a track. Tracks with high valence sound more positive (e.g. happy, cheerful, euphoric), while tracks with low valence sound more negative (e.g. sad, depressed, angry)."),
    ),
    (
        "tempo",
        FeatureInfo {
            min: 0.0,
            max: None,
            description: "The overall estimated tempo of a track in beats per minute (BPM). In musical terminology, tempo is the speed or pace of a given piece and derives directly from the average beat duration.",
        },
    ),
    (
        "duration_ms",
        FeatureInfo {
            min: 0.0,
            max: None,
            description: "The duration of the track in milliseconds.",
        },
    ),
    (
        "time_signature",
        FeatureInfo {
            min: 0.0,
            max: None,
            description: "An estimated overall time signature of a track. The time signature (meter) is a notational convention to specify how many beats are in each bar (or measure).",
        },
    ),
];
