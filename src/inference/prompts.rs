// src/inference/prompts.rs

//! Prompt templates for the three metadata steps.
//!
//! Each step asks for a single short answer. The sanitizer strips any
//! `Filename:` or `Category:` echo the model adds, so the templates end on
//! that cue without relying on the model to omit it.

use crate::constants::MAX_PROMPT_CONTENT_CHARS;

/// Step 1 for text files: a short summary of the extracted content.
pub fn text_summary(content: &str) -> String {
    let excerpt: String = content.chars().take(MAX_PROMPT_CONTENT_CHARS).collect();
    format!("Summarize the following text in 100 words or less:\n\n{excerpt}")
}

/// Step 1 for images: a description of the main subject.
pub fn image_description() -> &'static str {
    "Please provide a detailed description of this image, focusing on the main subject and any important details."
}

/// Step 2: a file name of at most three words, conditioned on the description.
pub fn file_name(description: &str, is_image: bool) -> String {
    let (subject, data_words, example) = if is_image {
        (
            "the image",
            "'image', 'jpg', 'png'",
            "Description: A photo of a sunset over the mountains.\nFilename: sunset_over_mountains",
        )
    } else {
        (
            "the document",
            "'text', 'document', 'pdf'",
            "Summary: An article discussing the effects of climate change on polar bears.\nFilename: climate_polar_bears",
        )
    };
    format!(
        "Based on the description below, generate a specific and descriptive filename for {subject}.\n\
         Limit the filename to a maximum of 3 words. Use nouns and avoid starting with verbs like 'depicts', 'shows', 'presents', etc.\n\
         Do not include any data type words like {data_words}, etc. Use only letters and connect words with underscores.\n\n\
         Description: {description}\n\n\
         Example:\n{example}\n\n\
         Output only the filename, without any additional text.\n\n\
         Filename:"
    )
}

/// Step 3: a category of at most two words, conditioned on the description.
pub fn category(description: &str, is_image: bool) -> String {
    let (subject, examples) = if is_image {
        (
            "this image",
            "Description: A photo of a sunset over the mountains.\nCategory: landscapes\n\n\
             Description: A close-up of a blooming red rose with dew drops.\nCategory: nature",
        )
    } else {
        (
            "this document",
            "Summary: A research paper on the fundamentals of string theory.\nCategory: physics\n\n\
             Summary: An article discussing the effects of climate change on polar bears.\nCategory: environment",
        )
    };
    format!(
        "Based on the description below, generate a general category or theme that best represents the main subject of {subject}.\n\
         This will be used as the folder name. Limit the category to a maximum of 2 words. Use nouns and avoid verbs.\n\
         Do not include specific details, words from the filename, or any generic terms like 'untitled' or 'unknown'.\n\n\
         Description: {description}\n\n\
         Examples:\n{examples}\n\n\
         Output only the category, without any additional text.\n\n\
         Category:"
    )
}
