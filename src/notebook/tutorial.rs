//! Cell content of the character-level tokenization and embeddings notebook.

use indoc::indoc;

use crate::domain::notebook::{Cell, Notebook, NotebookMetadata};

pub fn build_notebook() -> Notebook {
    let cells = vec![
        Cell::markdown(indoc! {"
            # Character-Level Tokenization and Embeddings

            This notebook demonstrates character-level tokenization and embeddings using the Shakespeare dataset, following Andrej Karpathy's approach."
        }),
        Cell::code(indoc! {"
            import torch
            import numpy as np
            from pathlib import Path"
        }),
        Cell::markdown("## Load and Inspect the Data"),
        Cell::code(indoc! {r#"
            # Read the Shakespeare text
            with open('../data/shakespeare.txt', 'r', encoding='utf-8') as f:
                text = f.read()

            print(f'Length of dataset in characters: {len(text)}')
            print('\nFirst 1000 characters:\n')
            print(text[:1000])"#
        }),
        Cell::markdown(indoc! {"
            ## Character-Level Tokenization

            In character-level tokenization, each unique character in the text becomes a token. This is the simplest form of tokenization."
        }),
        Cell::code(indoc! {r#"
            # Get all unique characters in the text
            chars = sorted(list(set(text)))
            vocab_size = len(chars)

            print(f'Vocabulary size (unique characters): {vocab_size}')
            print('\nAll characters:', ''.join(chars))"#
        }),
        Cell::code(indoc! {r#"
            # Create mappings from characters to integers and back
            char_to_idx = {ch: i for i, ch in enumerate(chars)}
            idx_to_char = {i: ch for i, ch in enumerate(chars)}

            # Example: encode and decode some text
            example_text = "Hello, World!"
            encoded = [char_to_idx[ch] for ch in example_text]
            decoded = ''.join([idx_to_char[idx] for idx in encoded])

            print(f'Original text: {example_text}')
            print(f'Encoded: {encoded}')
            print(f'Decoded: {decoded}')"#
        }),
        Cell::markdown(indoc! {"
            ## Character Embeddings

            Now we'll create character embeddings. Each character will be represented by a vector in a higher-dimensional space."
        }),
        Cell::code(indoc! {r#"
            # Parameters for embeddings
            embedding_dim = 16  # Dimension of the embedding space

            # Create a random embedding table
            embeddings = torch.nn.Embedding(vocab_size, embedding_dim)

            # Example: get embeddings for a sequence of characters
            example_sequence = torch.tensor(encoded)  # Using the encoded text from above
            embedded_sequence = embeddings(example_sequence)

            print(f'Shape of embedded sequence: {embedded_sequence.shape}')
            print('\nEmbedding for first character:')
            print(embedded_sequence[0].detach().numpy())"#
        }),
        Cell::markdown(indoc! {"
            ## Creating Training Examples

            Let's see how to create training examples for a language model. Each example will consist of a sequence of characters and the next character as the target."
        }),
        Cell::code(indoc! {r#"
            # Convert entire text to indices
            data = torch.tensor([char_to_idx[ch] for ch in text], dtype=torch.long)

            # Create sequences of context_length characters
            context_length = 8
            x = torch.stack([data[i:i+context_length] for i in range(len(data)-context_length)])
            y = data[context_length:]

            print(f'Shape of input sequences: {x.shape}')
            print(f'Shape of target values: {y.shape}')

            # Show an example
            idx = 0  # First sequence
            context = ''.join([idx_to_char[int(i)] for i in x[idx]])
            next_char = idx_to_char[int(y[idx])]
            print(f'\nExample:')
            print(f'Context: "{context}"')
            print(f'Next character: "{next_char}"')"#
        }),
        Cell::markdown(indoc! {"
            ## Visualizing Embeddings

            We can visualize the learned embeddings by projecting them to 2D using PCA."
        }),
        Cell::code(indoc! {r#"
            from sklearn.decomposition import PCA
            import matplotlib.pyplot as plt

            # Get the embedding weights
            weights = embeddings.weight.detach().numpy()

            # Project to 2D using PCA
            pca = PCA(n_components=2)
            projected = pca.fit_transform(weights)

            # Plot
            plt.figure(figsize=(12, 8))
            plt.scatter(projected[:, 0], projected[:, 1], alpha=0.5)

            # Add character labels
            for i, char in enumerate(chars):
                if char == '\n': char = 'newline'  # Make newline visible
                plt.annotate(char, (projected[i, 0], projected[i, 1]))

            plt.title('Character Embeddings Projected to 2D')
            plt.xlabel('First Principal Component')
            plt.ylabel('Second Principal Component')
            plt.grid(True)
            plt.show()"#
        }),
    ];

    Notebook::new(cells, NotebookMetadata::python3())
}

#[cfg(test)]
mod tests {
    use super::build_notebook;
    use crate::domain::notebook::Cell;

    #[test]
    fn alternates_explanation_and_code() {
        let notebook = build_notebook();
        let kinds: String = notebook
            .cells
            .iter()
            .map(|c| if c.is_code() { 'c' } else { 'm' })
            .collect();

        assert_eq!(kinds, "mcmcmccmcmcmc");
    }

    #[test]
    fn reads_downloaded_dataset() {
        let notebook = build_notebook();
        let loader = notebook.cells[3].source().concat();

        assert!(loader.contains("open('../data/shakespeare.txt', 'r', encoding='utf-8')"));
        assert!(loader.contains("print('\\nFirst 1000 characters:\\n')"));
    }

    #[test]
    fn first_line_is_title() {
        let notebook = build_notebook();
        match &notebook.cells[0] {
            Cell::Markdown { source, .. } => {
                assert_eq!(source[0], "# Character-Level Tokenization and Embeddings\n");
                assert_eq!(source[1], "\n");
            }
            other => panic!("expected markdown, got {other:?}"),
        }
    }

    #[test]
    fn last_line_has_no_trailing_newline() {
        let notebook = build_notebook();
        for cell in &notebook.cells {
            let last = cell.source().last().expect("cell has content");
            assert!(!last.ends_with('\n'), "dangling newline in {last:?}");
        }
    }

    #[test]
    fn code_indentation_survives_dedent() {
        let notebook = build_notebook();
        let plot = notebook.cells[12].source();

        assert!(plot.contains(&"for i, char in enumerate(chars):\n".to_owned()));
        assert!(plot.contains(&"    if char == '\\n': char = 'newline'  # Make newline visible\n".to_owned()));
        assert_eq!(plot.last().map(String::as_str), Some("plt.show()"));
    }
}
